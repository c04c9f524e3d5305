//! # Infrastructure Layer
//!
//! Concrete implementations behind the core collaborator traits:
//!
//! - **Database**: MySQL persistence for email identity entries using SQLx
//! - **Cache**: Redis-backed session store for pending verification records
//! - **Mail**: HTTP relay and mock mailers behind `MailerTrait`

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Cache module - Redis client and the session store adapter
pub mod cache;

/// Mail module - outbound mail delivery implementations
pub mod mail;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis session store error
    #[error("Session store error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for the mail relay
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail delivery error
    #[error("Mail delivery error: {0}")]
    Mail(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
