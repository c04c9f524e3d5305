//! Verification endpoints: send-code and verify-code

mod send_code;
mod verify_code;

pub use send_code::send_code;
pub use verify_code::verify_code;

use std::sync::Arc;

use vf_core::repositories::EmailIdentityRepository;
use vf_core::services::verification::{MailerTrait, SessionStoreTrait, VerificationService};

/// Application state that holds shared services
pub struct AppState<M, S, I>
where
    M: MailerTrait,
    S: SessionStoreTrait,
    I: EmailIdentityRepository,
{
    pub verification_service: Arc<VerificationService<M, S, I>>,
}
