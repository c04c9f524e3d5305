//! Mock collaborators for verification service tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::services::verification::traits::{MailMessage, MailerTrait, SessionStoreTrait};

/// Mock mailer recording every dispatched message
pub struct MockMailer {
    messages: RwLock<Vec<MailMessage>>,
    counter: AtomicU64,
    fail: AtomicBool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
            counter: AtomicU64::new(0),
            fail: AtomicBool::new(false),
        }
    }

    /// Make subsequent sends fail
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub async fn sent_count(&self) -> usize {
        self.messages.read().await.len()
    }

    pub async fn last_message(&self) -> Option<MailMessage> {
        self.messages.read().await.last().cloned()
    }
}

#[async_trait]
impl MailerTrait for MockMailer {
    async fn send(&self, message: &MailMessage) -> Result<String, String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("simulated relay outage".to_string());
        }
        let id = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.messages.write().await.push(message.clone());
        Ok(format!("mock-{}", id))
    }
}

/// In-memory session store mirroring Redis semantics
///
/// Deletes of absent keys succeed silently.
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }
}

#[async_trait]
impl SessionStoreTrait for InMemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), String> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

pub type SharedMailer = Arc<MockMailer>;
pub type SharedSessions = Arc<InMemorySessionStore>;
