//! Domain entities

pub mod email_identity;
pub mod verification_code;

pub use email_identity::EmailIdentity;
pub use verification_code::VerificationCode;
