//! Redis-backed implementation of the core session store boundary.
//!
//! Every failure maps to `DomainError::StoreUnavailable` so the registry and
//! the authenticator fail closed: a Redis outage is an error, never an
//! absent session.

use async_trait::async_trait;

use aw_core::errors::DomainError;
use aw_core::services::session::SessionStoreTrait;

use super::redis_client::RedisClient;

/// Redis implementation of the session store
#[derive(Clone)]
pub struct RedisSessionStore {
    client: RedisClient,
}

impl RedisSessionStore {
    /// Create a new session store over a Redis client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionStoreTrait for RedisSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.client
            .get(key)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("Session store read failed: {}", e),
            })
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), DomainError> {
        self.client
            .set_with_expiry(key, value, expiry_seconds)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("Session store write failed: {}", e),
            })
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        self.client
            .delete(key)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("Session store delete failed: {}", e),
            })
    }
}
