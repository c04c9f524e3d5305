//! Verification service module for email verification codes
//!
//! This module provides the complete verification code workflow:
//! - Code generation and delivery by email
//! - Resend cooldown enforcement
//! - Expiry-checked code confirmation
//! - Session-store-backed pending state, scoped per user

mod config;
mod email_utils;
mod keys;
mod message;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use email_utils::{is_valid_email, mask_email};
pub use keys::{code_key, issued_at_key, last_sent_key};
pub use message::VerificationMessage;
pub use service::VerificationService;
pub use traits::{MailMessage, MailerTrait, SessionStoreTrait};
pub use types::SendCodeOutcome;
