//! Mock implementation of WatchlistRepository for testing
//!
//! The mock enforces the same compound-key uniqueness the MySQL schema does,
//! so concurrency tests against it exercise the real race resolution.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::watchlist::ListEntry;
use crate::errors::{DomainError, WatchlistError};

use super::trait_::WatchlistRepository;

/// Mock watchlist repository for testing
pub struct MockWatchlistRepository {
    entries: Arc<RwLock<HashMap<(Uuid, Uuid), ListEntry>>>,
}

impl MockWatchlistRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of persisted entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for MockWatchlistRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WatchlistRepository for MockWatchlistRepository {
    async fn find_entry(
        &self,
        user_id: Uuid,
        title_id: Uuid,
    ) -> Result<Option<ListEntry>, DomainError> {
        let entries = self.entries.read().await;
        Ok(entries.get(&(user_id, title_id)).cloned())
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<ListEntry>, DomainError> {
        let entries = self.entries.read().await;
        let mut result: Vec<ListEntry> = entries
            .values()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        result.sort_by_key(|e| e.created_at);
        Ok(result)
    }

    async fn insert(&self, entry: ListEntry) -> Result<ListEntry, DomainError> {
        let mut entries = self.entries.write().await;
        let key = (entry.user_id, entry.title_id);

        // The write lock makes the check-and-insert atomic, mirroring the
        // schema's uniqueness constraint
        if entries.contains_key(&key) {
            return Err(DomainError::Watchlist(WatchlistError::DuplicateEntry));
        }

        entries.insert(key, entry.clone());
        Ok(entry)
    }

    async fn update(&self, entry: ListEntry) -> Result<ListEntry, DomainError> {
        let mut entries = self.entries.write().await;
        let key = (entry.user_id, entry.title_id);

        if !entries.contains_key(&key) {
            return Err(DomainError::Watchlist(WatchlistError::EntryNotFound));
        }

        entries.insert(key, entry.clone());
        Ok(entry)
    }

    async fn delete(&self, user_id: Uuid, title_id: Uuid) -> Result<bool, DomainError> {
        let mut entries = self.entries.write().await;
        Ok(entries.remove(&(user_id, title_id)).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_rejects_duplicate_pair() {
        let repo = MockWatchlistRepository::new();
        let user_id = Uuid::new_v4();
        let title_id = Uuid::new_v4();

        repo.insert(ListEntry::new(user_id, title_id)).await.unwrap();
        let result = repo.insert(ListEntry::new(user_id, title_id)).await;

        assert!(matches!(
            result,
            Err(DomainError::Watchlist(WatchlistError::DuplicateEntry))
        ));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_by_user_filters_owner() {
        let repo = MockWatchlistRepository::new();
        let user_a = Uuid::new_v4();
        let user_b = Uuid::new_v4();
        let title_id = Uuid::new_v4();

        repo.insert(ListEntry::new(user_a, title_id)).await.unwrap();
        repo.insert(ListEntry::new(user_b, title_id)).await.unwrap();

        let entries = repo.find_by_user(user_a).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].user_id, user_a);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = MockWatchlistRepository::new();
        let user_id = Uuid::new_v4();
        let title_id = Uuid::new_v4();

        repo.insert(ListEntry::new(user_id, title_id)).await.unwrap();

        assert!(repo.delete(user_id, title_id).await.unwrap());
        assert!(!repo.delete(user_id, title_id).await.unwrap());
    }
}
