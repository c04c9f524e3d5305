//! Verification code workflow configuration

use serde::{Deserialize, Serialize};

/// Default number of minutes before a verification code expires
pub const DEFAULT_CODE_EXPIRY_MINUTES: i64 = 10;

/// Default minimum seconds between code resend requests
pub const DEFAULT_COOLDOWN_SECONDS: i64 = 60;

/// Configuration for the email verification code workflow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Number of minutes before a verification code expires
    pub code_expiry_minutes: i64,

    /// Minimum seconds between code resend requests
    pub cooldown_seconds: i64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_expiry_minutes: DEFAULT_CODE_EXPIRY_MINUTES,
            cooldown_seconds: DEFAULT_COOLDOWN_SECONDS,
        }
    }
}

impl VerificationConfig {
    /// Create configuration from environment variables
    ///
    /// Reads `CODE_EXPIRY_MINUTES` and `COOLDOWN_SECONDS`, falling back to
    /// the defaults (10 minutes, 60 seconds) when unset or unparseable.
    pub fn from_env() -> Self {
        let code_expiry_minutes = std::env::var("CODE_EXPIRY_MINUTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CODE_EXPIRY_MINUTES);
        let cooldown_seconds = std::env::var("COOLDOWN_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_COOLDOWN_SECONDS);

        Self {
            code_expiry_minutes,
            cooldown_seconds,
        }
    }
}
