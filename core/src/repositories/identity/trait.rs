//! Email identity repository trait defining the interface for persistence.
//!
//! The trait is async-first and uses Result types for proper error handling.
//! Implementations live in the infrastructure layer; the in-crate mock backs
//! the service tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::email_identity::EmailIdentity;
use crate::errors::DomainError;

/// Repository contract for a user's primary email entry
#[async_trait]
pub trait EmailIdentityRepository: Send + Sync {
    /// Find the primary email entry for a user
    ///
    /// # Returns
    /// * `Ok(Some(EmailIdentity))` - Entry found
    /// * `Ok(None)` - No entry on file for this user
    /// * `Err(DomainError)` - Storage error occurred
    async fn find_primary(&self, user_id: Uuid) -> Result<Option<EmailIdentity>, DomainError>;

    /// Idempotent upsert of the primary email entry
    ///
    /// Creates an unverified entry with the given address when none exists.
    /// When an entry already exists it is returned unchanged, verified or
    /// not; the caller decides what an existing verified entry means.
    async fn upsert_unverified(
        &self,
        user_id: Uuid,
        email: &str,
    ) -> Result<EmailIdentity, DomainError>;

    /// Persist an updated entry (typically after flipping the verified flag)
    async fn update(&self, entry: EmailIdentity) -> Result<EmailIdentity, DomainError>;
}
