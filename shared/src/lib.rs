//! Shared utilities and common types for the AniWatch server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Common response structures

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    AuthConfig, CacheConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig, ServerConfig,
};
pub use types::response::ErrorBody;
