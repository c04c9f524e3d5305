//! Mock implementation of EmailIdentityRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::email_identity::EmailIdentity;
use crate::errors::DomainError;

use super::trait_::EmailIdentityRepository;

/// In-memory email identity repository for testing and development
#[derive(Clone)]
pub struct MockEmailIdentityRepository {
    entries: Arc<RwLock<HashMap<Uuid, EmailIdentity>>>,
}

impl MockEmailIdentityRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the repository with an existing entry
    pub async fn insert(&self, entry: EmailIdentity) {
        self.entries.write().await.insert(entry.user_id, entry);
    }
}

impl Default for MockEmailIdentityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailIdentityRepository for MockEmailIdentityRepository {
    async fn find_primary(&self, user_id: Uuid) -> Result<Option<EmailIdentity>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(&user_id).cloned())
    }

    async fn upsert_unverified(
        &self,
        user_id: Uuid,
        email: &str,
    ) -> Result<EmailIdentity, DomainError> {
        let mut entries = self.entries.write().await;
        let entry = entries
            .entry(user_id)
            .or_insert_with(|| EmailIdentity::new_unverified(user_id, email));
        Ok(entry.clone())
    }

    async fn update(&self, entry: EmailIdentity) -> Result<EmailIdentity, DomainError> {
        let mut entries = self.entries.write().await;
        if !entries.contains_key(&entry.user_id) {
            return Err(DomainError::NotFound {
                resource: format!("email identity for user {}", entry.user_id),
            });
        }
        entries.insert(entry.user_id, entry.clone());
        Ok(entry)
    }
}
