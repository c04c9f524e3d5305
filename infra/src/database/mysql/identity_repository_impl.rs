//! MySQL implementation of the EmailIdentityRepository trait.
//!
//! Persists each user's primary email entry with its verified flag. The
//! upsert is an INSERT ... ON DUPLICATE KEY UPDATE that leaves an existing
//! row untouched, so concurrent send requests never reset a verified flag.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vf_core::domain::entities::email_identity::EmailIdentity;
use vf_core::errors::DomainError;
use vf_core::repositories::EmailIdentityRepository;

/// MySQL implementation of EmailIdentityRepository
pub struct MySqlEmailIdentityRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlEmailIdentityRepository {
    /// Create a new MySQL email identity repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an EmailIdentity entity
    fn row_to_entry(row: &sqlx::mysql::MySqlRow) -> Result<EmailIdentity, DomainError> {
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get user_id: {}", e),
        })?;

        Ok(EmailIdentity {
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid UUID in user_id column: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            verified: row.try_get("verified").map_err(|e| DomainError::Internal {
                message: format!("Failed to get verified: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl EmailIdentityRepository for MySqlEmailIdentityRepository {
    async fn find_primary(&self, user_id: Uuid) -> Result<Option<EmailIdentity>, DomainError> {
        let query = r#"
            SELECT user_id, email, verified, created_at, updated_at
            FROM email_identities
            WHERE user_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_entry(&row)?)),
            None => Ok(None),
        }
    }

    async fn upsert_unverified(
        &self,
        user_id: Uuid,
        email: &str,
    ) -> Result<EmailIdentity, DomainError> {
        let candidate = EmailIdentity::new_unverified(user_id, email);

        // `user_id = user_id` makes the duplicate branch a no-op, preserving
        // the existing row including its verified flag
        let query = r#"
            INSERT INTO email_identities (user_id, email, verified, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE user_id = user_id
        "#;

        sqlx::query(query)
            .bind(candidate.user_id.to_string())
            .bind(&candidate.email)
            .bind(candidate.verified)
            .bind(candidate.created_at)
            .bind(candidate.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to upsert email identity: {}", e),
            })?;

        // Re-read so callers always see the persisted row, new or existing
        self.find_primary(user_id)
            .await?
            .ok_or_else(|| DomainError::Internal {
                message: "Email identity missing after upsert".to_string(),
            })
    }

    async fn update(&self, entry: EmailIdentity) -> Result<EmailIdentity, DomainError> {
        let query = r#"
            UPDATE email_identities SET
                email = ?,
                verified = ?,
                updated_at = ?
            WHERE user_id = ?
        "#;

        let updated_at = Utc::now();
        let result = sqlx::query(query)
            .bind(&entry.email)
            .bind(entry.verified)
            .bind(updated_at)
            .bind(entry.user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update email identity: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("Email identity for user {}", entry.user_id),
            });
        }

        let mut updated = entry;
        updated.updated_at = updated_at;
        Ok(updated)
    }
}
