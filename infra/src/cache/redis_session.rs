//! Redis-backed session store for pending verification records

use async_trait::async_trait;

use vf_core::services::verification::SessionStoreTrait;
use vf_shared::config::CacheConfig;

use crate::cache::redis_client::RedisClient;
use crate::InfrastructureError;

/// Session store adapter over the Redis client
///
/// Every entry carries a safety TTL so that abandoned verification records do
/// not linger indefinitely. The TTL is deliberately much longer than the
/// logical code expiry, which is computed from the stored issue timestamp;
/// this keeps the expired-versus-absent distinction deterministic.
pub struct RedisSessionStore {
    client: RedisClient,
    entry_ttl_secs: u64,
}

impl RedisSessionStore {
    /// Create a session store over an existing Redis client
    pub fn new(client: RedisClient, entry_ttl_secs: u64) -> Self {
        Self {
            client,
            entry_ttl_secs,
        }
    }

    /// Connect to Redis and build the session store from configuration
    pub async fn connect(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        let client = RedisClient::new(config).await?;
        Ok(Self::new(client, config.entry_ttl_secs))
    }
}

#[async_trait]
impl SessionStoreTrait for RedisSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.client.get(key).await.map_err(|e| e.to_string())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.client
            .set_with_expiry(key, value, self.entry_ttl_secs)
            .await
            .map_err(|e| e.to_string())
    }

    async fn delete(&self, key: &str) -> Result<(), String> {
        // The boolean result is discarded: absent keys are a no-op
        self.client
            .delete(key)
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
