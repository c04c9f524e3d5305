//! Domain-specific error types and error handling.

use thiserror::Error;

/// Verification workflow errors
///
/// Every variant is recovered locally by the API layer and translated into a
/// structured failure response; none are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Email address is already verified")]
    AlreadyVerified,

    #[error("Please wait {seconds_remaining} seconds before requesting a new code")]
    CooldownActive { seconds_remaining: i64 },

    #[error("Failed to send verification email")]
    DispatchFailed,

    #[error("No verification code is pending for this account")]
    NoPendingCode,

    #[error("Verification code has expired")]
    CodeExpired,

    #[error("Invalid verification code")]
    CodeMismatch,
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to the verification taxonomy
    #[error(transparent)]
    Verification(#[from] VerificationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl VerificationError {
    /// Stable error code for API payloads
    pub fn code(&self) -> &'static str {
        match self {
            VerificationError::AlreadyVerified => "ALREADY_VERIFIED",
            VerificationError::CooldownActive { .. } => "COOLDOWN_ACTIVE",
            VerificationError::DispatchFailed => "DISPATCH_FAILED",
            VerificationError::NoPendingCode => "NO_PENDING_CODE",
            VerificationError::CodeExpired => "CODE_EXPIRED",
            VerificationError::CodeMismatch => "CODE_MISMATCH",
        }
    }
}
