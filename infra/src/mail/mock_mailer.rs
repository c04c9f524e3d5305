//! Mock mailer implementation
//!
//! Logs messages to the console instead of sending them. Used in development
//! and wherever no relay is configured.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use vf_core::services::verification::{mask_email, MailMessage, MailerTrait};

/// Mock mailer for development and testing
///
/// This implementation:
/// - Prints messages to the console
/// - Generates mock message ids
/// - Tracks message count for testing
#[derive(Clone)]
pub struct MockMailer {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockMailer {
    /// Create a new mock mailer
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock mailer with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailerTrait for MockMailer {
    async fn send(&self, message: &MailMessage) -> Result<String, String> {
        let masked = mask_email(&message.to);

        if self.simulate_failure {
            warn!("Mock mailer simulating failure for recipient: {}", masked);
            return Err("Simulated mail delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK MAILER - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {} (masked: {})", message.to, masked);
            println!("Subject: {}", message.subject);
            println!("Message ID: {}", message_id);
            println!("{}", message.text_body);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "mail_service",
            provider = "mock",
            recipient = %masked,
            message_id = %message_id,
            "Email sent successfully (mock)"
        );

        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_message() -> MailMessage {
        MailMessage {
            to: "user@example.com".to_string(),
            subject: "Verify your email address".to_string(),
            text_body: "Your verification code is 482913.".to_string(),
            html_body: "<strong>482913</strong>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_send_success() {
        let mailer = MockMailer::with_options(false, false);
        let result = mailer.send(&sample_message()).await;

        assert!(result.is_ok());
        assert!(result.unwrap().starts_with("mock_"));
        assert_eq!(mailer.get_message_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_simulate_failure() {
        let mailer = MockMailer::with_options(false, true);
        let result = mailer.send(&sample_message()).await;

        assert!(result.is_err());
        assert_eq!(mailer.get_message_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_counter_increments() {
        let mailer = MockMailer::with_options(false, false);

        for i in 1..=3 {
            mailer.send(&sample_message()).await.unwrap();
            assert_eq!(mailer.get_message_count(), i);
        }
    }
}
