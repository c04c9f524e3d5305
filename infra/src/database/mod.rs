//! Database layer - MySQL persistence using SQLx

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::MySqlEmailIdentityRepository;
