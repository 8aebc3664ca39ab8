//! Database module for MySQL persistence
//!
//! Provides the connection pool bootstrap and the repository
//! implementations backed by SQLx.

pub mod connection;
pub mod mysql;

pub use connection::create_pool;
pub use mysql::{MySqlTitleRepository, MySqlUserRepository, MySqlWatchlistRepository};
