//! Primary email entry attached to a user identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's primary email entry with its verified flag
///
/// Each user has at most one primary entry. Entries start unverified and are
/// flipped to verified exactly once, by a successful code confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailIdentity {
    /// Owning user identifier
    pub user_id: Uuid,

    /// Email address on file
    pub email: String,

    /// Whether the address has been confirmed via a verification code
    pub verified: bool,

    /// Timestamp when the entry was created
    pub created_at: DateTime<Utc>,

    /// Timestamp of the last modification
    pub updated_at: DateTime<Utc>,
}

impl EmailIdentity {
    /// Creates a new unverified entry for a user
    pub fn new_unverified(user_id: Uuid, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            email: email.into(),
            verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the entry as verified
    pub fn verify(&mut self) {
        self.verified = true;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_unverified() {
        let entry = EmailIdentity::new_unverified(Uuid::new_v4(), "user@example.com");

        assert_eq!(entry.email, "user@example.com");
        assert!(!entry.verified);
        assert_eq!(entry.created_at, entry.updated_at);
    }

    #[test]
    fn test_verify_sets_flag_and_touches_timestamp() {
        let mut entry = EmailIdentity::new_unverified(Uuid::new_v4(), "user@example.com");
        entry.verify();

        assert!(entry.verified);
        assert!(entry.updated_at >= entry.created_at);
    }
}
