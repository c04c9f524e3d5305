//! MySQL repository implementations

pub mod identity_repository_impl;

pub use identity_repository_impl::MySqlEmailIdentityRepository;
