//! Email identity repository: trait and test double

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;
mod mock;

pub use mock::MockEmailIdentityRepository;
pub use r#trait::EmailIdentityRepository;
