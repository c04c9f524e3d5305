//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `cache` - Redis session store configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `mail` - Outbound mail relay configuration
//! - `server` - HTTP server configuration
//! - `verification` - Verification code expiry and resend cooldown

pub mod cache;
pub mod database;
pub mod environment;
pub mod mail;
pub mod server;
pub mod verification;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use mail::MailConfig;
pub use server::ServerConfig;
pub use verification::VerificationConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Redis session store configuration
    pub cache: CacheConfig,

    /// Outbound mail configuration
    pub mail: MailConfig,

    /// Verification code workflow configuration
    pub verification: VerificationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            mail: MailConfig::default(),
            verification: VerificationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            mail: MailConfig::from_env(),
            verification: VerificationConfig::from_env(),
        }
    }
}
