//! Session registry tracking the active refresh token per user.

use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::errors::DomainResult;

use super::store::SessionStoreTrait;

/// Key prefix for session entries in the store
const SESSION_KEY_PREFIX: &str = "session";

/// Registry of currently valid refresh tokens, one per user
///
/// Holds the single mapping `user id -> active refresh jti`. Rotation is a
/// last-writer-wins overwrite of that mapping; a refresh attempt whose jti no
/// longer matches the stored value is treated by the caller as token reuse
/// and answered with full revocation. The entry carries a TTL matching the
/// refresh token lifetime so stale sessions clean themselves up.
pub struct SessionRegistry<S: SessionStoreTrait> {
    store: Arc<S>,
}

impl<S: SessionStoreTrait> SessionRegistry<S> {
    /// Create a new registry over a session store
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Record `jti` as the active refresh token for a user
    ///
    /// Overwrites any prior value: registering a new session invalidates the
    /// previous one.
    pub async fn register(&self, user_id: Uuid, jti: &str, ttl_seconds: u64) -> DomainResult<()> {
        let key = session_key(user_id);
        debug!(%user_id, "registering active refresh token");
        self.store.set_with_expiry(&key, jti, ttl_seconds).await
    }

    /// Whether `jti` is the currently active refresh token for a user
    ///
    /// "No session" and "superseded session" are both `false`; store
    /// failures propagate as errors so callers fail closed.
    pub async fn is_active(&self, user_id: Uuid, jti: &str) -> DomainResult<bool> {
        let key = session_key(user_id);
        let stored = self.store.get(&key).await?;
        Ok(stored.as_deref() == Some(jti))
    }

    /// Drop the active session for a user; idempotent
    pub async fn revoke(&self, user_id: Uuid) -> DomainResult<()> {
        let key = session_key(user_id);
        debug!(%user_id, "revoking session");
        self.store.delete(&key).await?;
        Ok(())
    }
}

fn session_key(user_id: Uuid) -> String {
    format!("{}:{}", SESSION_KEY_PREFIX, user_id)
}

#[cfg(test)]
mod tests {
    use super::super::store::MockSessionStore;
    use super::*;
    use crate::errors::DomainError;

    fn registry() -> (SessionRegistry<MockSessionStore>, Arc<MockSessionStore>) {
        let store = Arc::new(MockSessionStore::new());
        (SessionRegistry::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_register_then_is_active() {
        let (registry, _) = registry();
        let user_id = Uuid::new_v4();

        registry.register(user_id, "jti-1", 60).await.unwrap();

        assert!(registry.is_active(user_id, "jti-1").await.unwrap());
        assert!(!registry.is_active(user_id, "jti-2").await.unwrap());
    }

    #[tokio::test]
    async fn test_register_overwrites_prior_session() {
        let (registry, _) = registry();
        let user_id = Uuid::new_v4();

        registry.register(user_id, "jti-1", 60).await.unwrap();
        registry.register(user_id, "jti-2", 60).await.unwrap();

        assert!(!registry.is_active(user_id, "jti-1").await.unwrap());
        assert!(registry.is_active(user_id, "jti-2").await.unwrap());
    }

    #[tokio::test]
    async fn test_no_session_is_not_active() {
        let (registry, _) = registry();
        assert!(!registry.is_active(Uuid::new_v4(), "jti").await.unwrap());
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent() {
        let (registry, _) = registry();
        let user_id = Uuid::new_v4();

        registry.register(user_id, "jti-1", 60).await.unwrap();
        registry.revoke(user_id).await.unwrap();
        registry.revoke(user_id).await.unwrap();

        assert!(!registry.is_active(user_id, "jti-1").await.unwrap());
    }

    #[tokio::test]
    async fn test_ttl_reaches_the_store() {
        let (registry, store) = registry();
        let user_id = Uuid::new_v4();

        registry.register(user_id, "jti-1", 1_209_600).await.unwrap();

        let key = format!("session:{}", user_id);
        assert_eq!(store.recorded_ttl(&key).await, Some(1_209_600));
    }

    #[tokio::test]
    async fn test_store_outage_propagates() {
        let (registry, store) = registry();
        let user_id = Uuid::new_v4();
        store.set_failing(true);

        assert!(matches!(
            registry.is_active(user_id, "jti").await,
            Err(DomainError::StoreUnavailable { .. })
        ));
    }
}
