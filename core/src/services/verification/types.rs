//! Types for verification service results

use chrono::{DateTime, Utc};

use crate::domain::entities::verification_code::VerificationCode;

/// Result of issuing a verification code
#[derive(Debug, Clone)]
pub struct SendCodeOutcome {
    /// The verification code that was issued
    pub verification_code: VerificationCode,
    /// The mail provider message id
    pub message_id: String,
    /// When the user can request another code
    pub next_resend_at: DateTime<Utc>,
}
