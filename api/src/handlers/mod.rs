//! Response handlers and error translation

pub mod error;

pub use error::to_response;
