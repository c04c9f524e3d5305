//! Rendering of the verification notification message

use super::traits::MailMessage;

/// Renders the verification email in plain-text and HTML variants
#[derive(Debug, Clone)]
pub struct VerificationMessage {
    code: String,
    expiry_minutes: i64,
}

impl VerificationMessage {
    /// Create a message for a freshly issued code
    pub fn new(code: impl Into<String>, expiry_minutes: i64) -> Self {
        Self {
            code: code.into(),
            expiry_minutes,
        }
    }

    /// Subject line
    pub fn subject(&self) -> String {
        "Verify your email address".to_string()
    }

    /// Plain-text body carrying the code and the expiry window
    pub fn text_body(&self) -> String {
        format!(
            "Your verification code is {code}.\n\n\
             Enter this code to verify your email address. \
             It expires in {minutes} minutes.\n\n\
             If you did not request this code, you can ignore this email.",
            code = self.code,
            minutes = self.expiry_minutes,
        )
    }

    /// Templated HTML body
    pub fn html_body(&self) -> String {
        format!(
            "<div style=\"font-family: sans-serif; max-width: 480px;\">\
             <h2>Verify your email address</h2>\
             <p>Enter this code to verify your email address:</p>\
             <p style=\"font-size: 28px; letter-spacing: 4px;\"><strong>{code}</strong></p>\
             <p>The code expires in {minutes} minutes.</p>\
             <p style=\"color: #888;\">If you did not request this code, you can ignore this email.</p>\
             </div>",
            code = self.code,
            minutes = self.expiry_minutes,
        )
    }

    /// Assemble the full outbound message for a recipient
    pub fn to_mail(&self, recipient: impl Into<String>) -> MailMessage {
        MailMessage {
            to: recipient.into(),
            subject: self.subject(),
            text_body: self.text_body(),
            html_body: self.html_body(),
        }
    }
}
