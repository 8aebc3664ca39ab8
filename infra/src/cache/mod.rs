//! Cache module backing the session registry
//!
//! Provides the Redis client with connection management and retry logic,
//! and the `SessionStoreTrait` implementation the core registry runs on.

pub mod redis_client;
pub mod session_store;

pub use redis_client::RedisClient;
pub use session_store::RedisSessionStore;

// Re-export commonly used types
pub use aw_shared::config::CacheConfig;
