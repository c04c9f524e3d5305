//! Repository interfaces for data persistence

pub mod identity;

pub use identity::{EmailIdentityRepository, MockEmailIdentityRepository};
