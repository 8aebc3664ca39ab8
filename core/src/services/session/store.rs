//! Session store boundary and its in-memory test double.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::DomainError;

/// TTL-capable key-value store backing the session registry
///
/// Implementations must map their I/O failures to
/// `DomainError::StoreUnavailable`: the registry fails closed, so an outage
/// must surface as an error, never as an absent key.
#[async_trait]
pub trait SessionStoreTrait: Send + Sync {
    /// Get the value stored under a key
    ///
    /// # Returns
    /// * `Ok(Some(String))` - Value found
    /// * `Ok(None)` - Key absent or expired
    /// * `Err(DomainError)` - Store unreachable
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Set a value with an expiration time, overwriting any prior value
    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), DomainError>;

    /// Delete a key
    ///
    /// # Returns
    /// * `Ok(true)` - Key was deleted
    /// * `Ok(false)` - Key was not present
    /// * `Err(DomainError)` - Store unreachable
    async fn delete(&self, key: &str) -> Result<bool, DomainError>;
}

/// In-memory session store for testing
///
/// Expiry is recorded but not enforced; tests that care about TTL semantics
/// assert on the recorded value. The store can be switched into a failing
/// mode to exercise fail-closed paths.
pub struct MockSessionStore {
    values: Arc<RwLock<HashMap<String, (String, u64)>>>,
    failing: AtomicBool,
}

impl MockSessionStore {
    /// Create a new mock store
    pub fn new() -> Self {
        Self {
            values: Arc::new(RwLock::new(HashMap::new())),
            failing: AtomicBool::new(false),
        }
    }

    /// Make every subsequent operation fail with `StoreUnavailable`
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// The expiry recorded for a key, if present
    pub async fn recorded_ttl(&self, key: &str) -> Option<u64> {
        self.values.read().await.get(key).map(|(_, ttl)| *ttl)
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable {
                message: "mock session store is offline".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStoreTrait for MockSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.check_available()?;
        let values = self.values.read().await;
        Ok(values.get(key).map(|(v, _)| v.clone()))
    }

    async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), DomainError> {
        self.check_available()?;
        let mut values = self.values.write().await;
        values.insert(key.to_string(), (value.to_string(), expiry_seconds));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        self.check_available()?;
        let mut values = self.values.write().await;
        Ok(values.remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_overwrites_prior_value() {
        let store = MockSessionStore::new();

        store.set_with_expiry("k", "first", 60).await.unwrap();
        store.set_with_expiry("k", "second", 120).await.unwrap();

        assert_eq!(store.get("k").await.unwrap(), Some("second".to_string()));
        assert_eq!(store.recorded_ttl("k").await, Some(120));
    }

    #[tokio::test]
    async fn test_failing_mode() {
        let store = MockSessionStore::new();
        store.set_failing(true);

        assert!(matches!(
            store.get("k").await,
            Err(DomainError::StoreUnavailable { .. })
        ));
    }
}
