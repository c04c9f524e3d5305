//! Redis session store layer
//!
//! Provides:
//! - Redis connection management with retry logic
//! - The `SessionStoreTrait` adapter used by the verification service

pub mod redis_client;
pub mod redis_session;

pub use redis_client::RedisClient;
pub use redis_session::RedisSessionStore;
