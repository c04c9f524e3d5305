//! Verification endpoint DTOs
//!
//! The send-code endpoint has no request body: the recipient address comes
//! from the authenticated user's token claims.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /api/v1/verification/verify-code
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    /// Submitted verification code
    ///
    /// Surrounding whitespace is tolerated and trimmed before comparison, so
    /// the length bound is looser than the six digits of a canonical code.
    #[validate(length(min = 1, max = 32))]
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_padded_code() {
        let request = VerifyCodeRequest {
            code: "  482913  ".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_code() {
        let request = VerifyCodeRequest {
            code: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
