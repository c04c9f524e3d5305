//! Redis session store configuration

use serde::{Deserialize, Serialize};

/// Redis cache configuration for the session store
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Connection pool size
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,

    /// Safety TTL in seconds applied to session entries
    ///
    /// Logical code expiry is computed from the stored issue timestamp; this
    /// TTL only bounds how long abandoned entries can linger in Redis.
    #[serde(default = "default_entry_ttl")]
    pub entry_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://127.0.0.1:6379"),
            pool_size: default_pool_size(),
            entry_ttl_secs: default_entry_ttl(),
        }
    }
}

impl CacheConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());

        Self {
            url,
            pool_size: default_pool_size(),
            entry_ttl_secs: default_entry_ttl(),
        }
    }
}

fn default_pool_size() -> u32 {
    10
}

fn default_entry_ttl() -> u64 {
    86_400
}
