//! Traits for mail and session store integration

use async_trait::async_trait;

/// An outbound email message
#[derive(Debug, Clone)]
pub struct MailMessage {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub text_body: String,
    /// Templated HTML body
    pub html_body: String,
}

/// Trait for mail delivery integration
#[async_trait]
pub trait MailerTrait: Send + Sync {
    /// Deliver a message, returning the provider message id
    async fn send(&self, message: &MailMessage) -> Result<String, String>;
}

/// Trait for the per-user session store
///
/// A flat string key-value map with request-level atomicity per key.
/// Deleting an absent key is a no-op, never an error.
#[async_trait]
pub trait SessionStoreTrait: Send + Sync {
    /// Read a value
    async fn get(&self, key: &str) -> Result<Option<String>, String>;
    /// Write a value, overwriting any previous one
    async fn set(&self, key: &str, value: &str) -> Result<(), String>;
    /// Remove a value if present
    async fn delete(&self, key: &str) -> Result<(), String>;
}
