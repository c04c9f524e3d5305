//! Email address helpers: validation and log masking

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    // Deliberately loose; the mail relay is the final authority
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

/// Check if a string looks like a deliverable email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Mask an email address for logging
///
/// Keeps the first two characters of the local part and the full domain:
/// `marianne@example.com` becomes `ma***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let prefix: String = local.chars().take(2).collect();
            format!("{}***@{}", prefix, domain)
        }
        None => "***".to_string(),
    }
}
