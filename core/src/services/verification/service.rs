//! Main verification service implementation

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use uuid::Uuid;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::{DomainError, DomainResult, VerificationError};
use crate::repositories::EmailIdentityRepository;

use super::config::VerificationServiceConfig;
use super::email_utils::{is_valid_email, mask_email};
use super::keys::{code_key, issued_at_key, last_sent_key};
use super::message::VerificationMessage;
use super::traits::{MailerTrait, SessionStoreTrait};
use super::types::SendCodeOutcome;

/// Verification service for the email code workflow
///
/// Drives both halves of the flow against three collaborators: the identity
/// repository (primary email entry with its verified flag), the mailer, and
/// the per-user session store holding the pending record.
pub struct VerificationService<M: MailerTrait, S: SessionStoreTrait, I: EmailIdentityRepository> {
    /// Mail delivery
    mailer: Arc<M>,
    /// Per-user session store
    sessions: Arc<S>,
    /// Email identity persistence
    identities: Arc<I>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<M: MailerTrait, S: SessionStoreTrait, I: EmailIdentityRepository>
    VerificationService<M, S, I>
{
    /// Create a new verification service
    pub fn new(
        mailer: Arc<M>,
        sessions: Arc<S>,
        identities: Arc<I>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            mailer,
            sessions,
            identities,
            config,
        }
    }

    /// Issue a verification code and send it to the user's email address
    ///
    /// Checks run in order: verified status first, then the resend cooldown.
    /// The code and its issue timestamp are stored before dispatch; the
    /// cooldown marker is only written after the mailer confirms delivery,
    /// so a failed dispatch never blocks an immediate retry.
    pub async fn send_verification_code(
        &self,
        user_id: Uuid,
        email_on_file: &str,
    ) -> DomainResult<SendCodeOutcome> {
        if !is_valid_email(email_on_file) {
            return Err(DomainError::Validation {
                message: format!(
                    "Email address on file is not deliverable: {}",
                    mask_email(email_on_file)
                ),
            });
        }

        let entry = self
            .identities
            .upsert_unverified(user_id, email_on_file)
            .await?;

        if entry.verified {
            tracing::info!(
                user_id = %user_id,
                event = "already_verified",
                "Rejecting send request for a verified address"
            );
            return Err(VerificationError::AlreadyVerified.into());
        }

        let now = Utc::now();
        if let Some(last_sent) = self.read_timestamp(&last_sent_key(user_id)).await? {
            let elapsed = now.signed_duration_since(last_sent).num_seconds();
            if elapsed < self.config.cooldown_seconds {
                let seconds_remaining = self.config.cooldown_seconds - elapsed;
                tracing::warn!(
                    user_id = %user_id,
                    seconds_remaining,
                    event = "cooldown_active",
                    "Verification code resend rejected by cooldown"
                );
                return Err(VerificationError::CooldownActive { seconds_remaining }.into());
            }
        }

        let verification_code =
            VerificationCode::new_with_expiry(self.config.code_expiry_minutes);

        self.session_set(&code_key(user_id), &verification_code.code)
            .await?;
        self.session_set(
            &issued_at_key(user_id),
            &verification_code.issued_at.to_rfc3339(),
        )
        .await?;

        tracing::info!(
            user_id = %user_id,
            email = %mask_email(&entry.email),
            event = "code_issued",
            "Issued new verification code"
        );

        let message = VerificationMessage::new(
            verification_code.code.clone(),
            self.config.code_expiry_minutes,
        )
        .to_mail(entry.email.clone());

        // Dispatch failures stay internal; the caller only learns that the
        // send failed. The stored code is deliberately left in place.
        let message_id = match self.mailer.send(&message).await {
            Ok(id) => id,
            Err(err) => {
                tracing::error!(
                    user_id = %user_id,
                    email = %mask_email(&entry.email),
                    error = %err,
                    event = "dispatch_failed",
                    "Failed to send verification email"
                );
                return Err(VerificationError::DispatchFailed.into());
            }
        };

        // Recorded only after confirmed dispatch to preserve the cooldown
        // contract. A crash between the code write and this write leaves a
        // pending code with no cooldown, which resolves itself on resend.
        self.session_set(&last_sent_key(user_id), &now.to_rfc3339())
            .await?;

        let next_resend_at = now + Duration::seconds(self.config.cooldown_seconds);

        Ok(SendCodeOutcome {
            verification_code,
            message_id,
            next_resend_at,
        })
    }

    /// Confirm a submitted code and mark the identity's email verified
    ///
    /// An expired pending record is cleared on sight and reported as
    /// `CodeExpired`; a mismatch leaves the record intact so the user can
    /// retry within the expiry window.
    pub async fn verify_code(
        &self,
        user_id: Uuid,
        email_on_file: &str,
        submitted_code: &str,
    ) -> DomainResult<()> {
        let submitted = submitted_code.trim();

        let stored_code = self.session_get(&code_key(user_id)).await?;
        let issued_at_raw = self.session_get(&issued_at_key(user_id)).await?;

        let (stored_code, issued_at_raw) = match (stored_code, issued_at_raw) {
            (Some(code), Some(issued_at)) => (code, issued_at),
            _ => {
                tracing::info!(
                    user_id = %user_id,
                    event = "no_pending_code",
                    "Verify attempt with no pending code"
                );
                return Err(VerificationError::NoPendingCode.into());
            }
        };

        let issued_at = match DateTime::parse_from_rfc3339(&issued_at_raw) {
            Ok(ts) => ts.with_timezone(&Utc),
            Err(err) => {
                // Corrupt record: clear it and treat as absent
                tracing::warn!(
                    user_id = %user_id,
                    error = %err,
                    event = "corrupt_record",
                    "Unparseable issue timestamp, clearing pending record"
                );
                self.clear_pending(user_id).await?;
                return Err(VerificationError::NoPendingCode.into());
            }
        };

        let elapsed = Utc::now().signed_duration_since(issued_at);
        if elapsed > Duration::minutes(self.config.code_expiry_minutes) {
            tracing::info!(
                user_id = %user_id,
                elapsed_seconds = elapsed.num_seconds(),
                event = "code_expired",
                "Verify attempt past the expiry window, clearing pending record"
            );
            self.clear_pending(user_id).await?;
            return Err(VerificationError::CodeExpired.into());
        }

        if !constant_time_eq(stored_code.as_bytes(), submitted.as_bytes()) {
            tracing::warn!(
                user_id = %user_id,
                event = "code_mismatch",
                "Verify attempt with wrong code"
            );
            return Err(VerificationError::CodeMismatch.into());
        }

        let mut entry = self
            .identities
            .upsert_unverified(user_id, email_on_file)
            .await?;
        entry.verify();
        self.identities.update(entry).await?;

        self.clear_pending(user_id).await?;
        self.session_delete(&last_sent_key(user_id)).await?;

        tracing::info!(
            user_id = %user_id,
            event = "email_verified",
            "Email address verified"
        );

        Ok(())
    }

    /// Remove the pending code and its issue timestamp
    ///
    /// Deleting absent keys is a no-op at the store level.
    async fn clear_pending(&self, user_id: Uuid) -> DomainResult<()> {
        self.session_delete(&code_key(user_id)).await?;
        self.session_delete(&issued_at_key(user_id)).await?;
        Ok(())
    }

    /// Read an RFC 3339 timestamp from the session store
    ///
    /// An unparseable value is treated as absent.
    async fn read_timestamp(&self, key: &str) -> DomainResult<Option<DateTime<Utc>>> {
        let raw = self.session_get(key).await?;
        Ok(raw
            .and_then(|v| DateTime::parse_from_rfc3339(&v).ok())
            .map(|ts| ts.with_timezone(&Utc)))
    }

    async fn session_get(&self, key: &str) -> DomainResult<Option<String>> {
        self.sessions
            .get(key)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Session store read failed: {}", e),
            })
    }

    async fn session_set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.sessions
            .set(key, value)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Session store write failed: {}", e),
            })
    }

    async fn session_delete(&self, key: &str) -> DomainResult<()> {
        self.sessions
            .delete(key)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Session store delete failed: {}", e),
            })
    }
}
