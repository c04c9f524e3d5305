//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard API response envelope
///
/// Every endpoint responds with this structure: `success` plus a
/// human-readable `message`, and on failure a stable `error` code the client
/// can branch on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable message
    pub message: String,

    /// Stable error code (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Whole seconds until the operation may be retried (cooldown failures)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds_remaining: Option<i64>,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl ApiResponse {
    /// Create a successful response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            error: None,
            seconds_remaining: None,
            timestamp: Utc::now(),
        }
    }

    /// Create an error response
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: Some(code.into()),
            seconds_remaining: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach the remaining cooldown seconds
    pub fn with_seconds_remaining(mut self, seconds: i64) -> Self {
        self.seconds_remaining = Some(seconds);
        self
    }
}
