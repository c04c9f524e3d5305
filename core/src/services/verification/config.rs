//! Configuration for the verification service

use crate::domain::entities::verification_code::DEFAULT_EXPIRY_MINUTES;
use vf_shared::config::VerificationConfig;

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of minutes before a verification code expires
    pub code_expiry_minutes: i64,
    /// Minimum seconds between code resend requests
    pub cooldown_seconds: i64,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_expiry_minutes: DEFAULT_EXPIRY_MINUTES,
            cooldown_seconds: 60,
        }
    }
}

impl From<VerificationConfig> for VerificationServiceConfig {
    fn from(config: VerificationConfig) -> Self {
        Self {
            code_expiry_minutes: config.code_expiry_minutes,
            cooldown_seconds: config.cooldown_seconds,
        }
    }
}
