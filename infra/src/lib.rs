//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the AniWatch backend,
//! following Clean Architecture principles. It provides concrete
//! implementations for database access and the session store.
//!
//! ## Architecture
//!
//! - **Database**: MySQL repository implementations using SQLx
//! - **Cache**: Redis client backing the session registry

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Cache module - Redis client and session store
pub mod cache;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
