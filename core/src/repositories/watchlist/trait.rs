//! Watchlist repository trait defining the interface for list-entry persistence.
//!
//! The `(user_id, title_id)` pair is the entry's identity and carries a
//! uniqueness constraint at the storage layer. Concurrent creations of the
//! same pair are serialized by that constraint, not by application locks:
//! `insert` reports a duplicate as `WatchlistError::DuplicateEntry` and the
//! caller resolves the race by re-fetching.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::watchlist::ListEntry;
use crate::errors::DomainError;

/// Repository trait for ListEntry persistence operations
#[async_trait]
pub trait WatchlistRepository: Send + Sync {
    /// Find the entry for a (user, title) pair
    ///
    /// # Returns
    /// * `Ok(Some(ListEntry))` - Entry found
    /// * `Ok(None)` - No entry for the pair
    /// * `Err(DomainError)` - Database error occurred
    async fn find_entry(
        &self,
        user_id: Uuid,
        title_id: Uuid,
    ) -> Result<Option<ListEntry>, DomainError>;

    /// Find all entries belonging to a user
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<ListEntry>, DomainError>;

    /// Insert a new entry
    ///
    /// # Returns
    /// * `Ok(ListEntry)` - The persisted entry
    /// * `Err(DomainError::Watchlist(WatchlistError::DuplicateEntry))` - An
    ///   entry for the pair already exists (possibly created concurrently)
    /// * `Err(DomainError)` - Other database error
    async fn insert(&self, entry: ListEntry) -> Result<ListEntry, DomainError>;

    /// Update an existing entry, identified by its (user, title) pair
    ///
    /// # Returns
    /// * `Ok(ListEntry)` - The updated entry
    /// * `Err(DomainError)` - Update failed (e.g., entry not found)
    async fn update(&self, entry: ListEntry) -> Result<ListEntry, DomainError>;

    /// Delete the entry for a (user, title) pair
    ///
    /// # Returns
    /// * `Ok(true)` - Entry was deleted
    /// * `Ok(false)` - No entry existed for the pair
    /// * `Err(DomainError)` - Deletion failed
    async fn delete(&self, user_id: Uuid, title_id: Uuid) -> Result<bool, DomainError>;
}
