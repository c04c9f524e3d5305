//! Outbound mail relay configuration

use serde::{Deserialize, Serialize};

/// Configuration for the outbound mail relay
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Mail provider ("http" for the relay API, "mock" for console output)
    pub provider: String,

    /// Relay API endpoint URL
    pub api_url: String,

    /// Relay API key
    pub api_key: String,

    /// From address for outgoing mail
    pub from_address: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_url: String::new(),
            api_key: String::new(),
            from_address: String::from("no-reply@veriflow.dev"),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl MailConfig {
    /// Create configuration from environment variables
    ///
    /// Falls back to the mock provider when `MAIL_API_URL` is unset so that
    /// development never requires a live relay.
    pub fn from_env() -> Self {
        let api_url = std::env::var("MAIL_API_URL").unwrap_or_default();
        let provider = std::env::var("MAIL_PROVIDER").unwrap_or_else(|_| {
            if api_url.is_empty() {
                "mock".to_string()
            } else {
                "http".to_string()
            }
        });
        let api_key = std::env::var("MAIL_API_KEY").unwrap_or_default();
        let from_address = std::env::var("MAIL_FROM")
            .unwrap_or_else(|_| "no-reply@veriflow.dev".to_string());

        Self {
            provider,
            api_url,
            api_key,
            from_address,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_request_timeout() -> u64 {
    30
}
