//! HTTP relay mailer implementation
//!
//! Delivers messages by posting JSON to a relay API endpoint. The relay is
//! expected to respond with a message id; when it does not, one is generated
//! locally so callers always get a delivery reference.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};
use uuid::Uuid;

use vf_core::services::verification::{mask_email, MailMessage, MailerTrait};
use vf_shared::config::MailConfig;

use crate::InfrastructureError;

/// Outbound payload for the relay API
#[derive(Debug, Serialize)]
struct RelayRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

/// Relay API response
#[derive(Debug, Deserialize)]
struct RelayResponse {
    id: Option<String>,
}

/// Mailer that posts to an HTTP relay API
pub struct HttpMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from_address: String,
}

impl HttpMailer {
    /// Create a new HTTP mailer from configuration
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        if config.api_url.is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_API_URL not set for the http mail provider".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(InfrastructureError::Http)?;

        info!(
            "HTTP mailer initialized with relay {} and from address {}",
            config.api_url,
            mask_email(&config.from_address)
        );

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
        })
    }

    async fn dispatch(&self, message: &MailMessage) -> Result<String, InfrastructureError> {
        let payload = RelayRequest {
            from: &self.from_address,
            to: &message.to,
            subject: &message.subject,
            text: &message.text_body,
            html: &message.html_body,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(InfrastructureError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = %status,
                recipient = %mask_email(&message.to),
                "Mail relay rejected the message: {}",
                body
            );
            return Err(InfrastructureError::Mail(format!(
                "Relay returned status {}",
                status
            )));
        }

        let relay_response: RelayResponse = response
            .json()
            .await
            .unwrap_or(RelayResponse { id: None });
        let message_id = relay_response
            .id
            .unwrap_or_else(|| format!("relay_{}", Uuid::new_v4()));

        info!(
            provider = "http",
            recipient = %mask_email(&message.to),
            message_id = %message_id,
            "Email handed to relay"
        );

        Ok(message_id)
    }
}

#[async_trait]
impl MailerTrait for HttpMailer {
    async fn send(&self, message: &MailMessage) -> Result<String, String> {
        self.dispatch(message).await.map_err(|e| e.to_string())
    }
}
