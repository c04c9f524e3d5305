//! Verification code entity for email-based verification.

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest code that can be generated
///
/// The lower bound is 100000, never 000000: generated codes carry no leading
/// zeros. A stored code is still compared by exact string equality, so the
/// full "000000"–"999999" space remains valid input.
pub const CODE_MIN: u32 = 100_000;

/// Largest code that can be generated
pub const CODE_MAX: u32 = 999_999;

/// Default expiration time for verification codes (10 minutes)
pub const DEFAULT_EXPIRY_MINUTES: i64 = 10;

/// Verification code entity for email-based verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// The 6-digit verification code
    pub code: String,

    /// Timestamp when the code was generated
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Creates a new verification code with the default expiration window
    pub fn new() -> Self {
        Self::new_with_expiry(DEFAULT_EXPIRY_MINUTES)
    }

    /// Creates a new verification code with a custom expiration window
    pub fn new_with_expiry(expiry_minutes: i64) -> Self {
        let code = Self::generate_code();
        let issued_at = Utc::now();
        let expires_at = issued_at + Duration::minutes(expiry_minutes);

        Self {
            code,
            issued_at,
            expires_at,
        }
    }

    /// Generates a random 6-digit code in the range 100000–999999
    ///
    /// Uses the OS-provided CSPRNG.
    pub fn generate_code() -> String {
        let code: u32 = OsRng.gen_range(CODE_MIN..=CODE_MAX);
        format!("{:06}", code)
    }

    /// Checks if the verification code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

impl Default for VerificationCode {
    fn default() -> Self {
        Self::new()
    }
}
