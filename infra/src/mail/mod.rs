//! Outbound mail delivery implementations
//!
//! Two providers sit behind `MailerTrait`:
//! - `HttpMailer` posts messages to an HTTP relay API
//! - `MockMailer` logs messages to the console for development and testing
//!
//! `AppMailer` selects between them from configuration so the rest of the
//! application stays generic over a single concrete type.

pub mod http_mailer;
pub mod mock_mailer;

pub use http_mailer::HttpMailer;
pub use mock_mailer::MockMailer;

use async_trait::async_trait;

use vf_core::services::verification::{MailMessage, MailerTrait};
use vf_shared::config::MailConfig;

use crate::InfrastructureError;

/// Configured mail provider
pub enum AppMailer {
    /// HTTP relay API delivery
    Http(HttpMailer),
    /// Console-logging delivery for development
    Mock(MockMailer),
}

impl AppMailer {
    /// Build the mailer selected by configuration
    ///
    /// Unknown provider names are rejected rather than silently mocked.
    pub fn from_config(config: &MailConfig) -> Result<Self, InfrastructureError> {
        match config.provider.as_str() {
            "http" => Ok(Self::Http(HttpMailer::new(config)?)),
            "mock" => Ok(Self::Mock(MockMailer::new())),
            other => Err(InfrastructureError::Config(format!(
                "Unknown mail provider: {}",
                other
            ))),
        }
    }

    /// Provider name for logging
    pub fn provider_name(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::Mock(_) => "mock",
        }
    }
}

#[async_trait]
impl MailerTrait for AppMailer {
    async fn send(&self, message: &MailMessage) -> Result<String, String> {
        match self {
            Self::Http(mailer) => mailer.send(message).await,
            Self::Mock(mailer) => mailer.send(message).await,
        }
    }
}
