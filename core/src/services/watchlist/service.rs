//! Main watchlist service implementation

use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::title::Title;
use crate::domain::entities::watchlist::{ListEntry, WatchStatus};
use crate::errors::{DomainError, DomainResult, WatchlistError};
use crate::repositories::{TitleRepository, WatchlistRepository};

/// Partial update applied to a watchlist entry
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressUpdate {
    /// New watch status, if changing
    pub status: Option<WatchStatus>,
    /// New episodes-watched count, if changing
    pub episodes_watched: Option<u32>,
}

/// Service enforcing per-user, per-title list consistency
///
/// Creation races are settled by the storage layer's compound-key uniqueness
/// constraint rather than application locks: a concurrent duplicate insert
/// surfaces as `DuplicateEntry` and is resolved by re-fetching the winner.
pub struct WatchlistService<W, T>
where
    W: WatchlistRepository,
    T: TitleRepository,
{
    /// Watchlist entry persistence
    watchlist_repository: Arc<W>,
    /// Catalog lookups for episode-count validation
    title_repository: Arc<T>,
}

impl<W, T> WatchlistService<W, T>
where
    W: WatchlistRepository,
    T: TitleRepository,
{
    /// Create a new watchlist service
    pub fn new(watchlist_repository: Arc<W>, title_repository: Arc<T>) -> Self {
        Self {
            watchlist_repository,
            title_repository,
        }
    }

    /// Add a title to a user's list, or return the existing entry unchanged
    ///
    /// The new entry defaults to `planned` with zero episodes; the request
    /// may seed an initial status and progress, validated like an update.
    ///
    /// # Returns
    ///
    /// * `Ok((ListEntry, true))` - A new entry was created
    /// * `Ok((ListEntry, false))` - The pair already had an entry; it is
    ///   returned unchanged
    /// * `Err(DomainError)` - Unknown title, invalid initial progress, or
    ///   persistence failure
    pub async fn add_or_get(
        &self,
        user_id: Uuid,
        title_id: Uuid,
        initial: ProgressUpdate,
    ) -> DomainResult<(ListEntry, bool)> {
        let title = self.require_title(title_id).await?;

        if let Some(existing) = self
            .watchlist_repository
            .find_entry(user_id, title_id)
            .await?
        {
            return Ok((existing, false));
        }

        let mut entry = ListEntry::new(user_id, title_id);
        apply_update(&mut entry, initial, &title)?;

        match self.watchlist_repository.insert(entry).await {
            Ok(created) => {
                debug!(%user_id, %title_id, "watchlist entry created");
                Ok((created, true))
            }
            // Lost the creation race; the constraint guarantees a winner
            // exists, so fetch and return it
            Err(DomainError::Watchlist(WatchlistError::DuplicateEntry)) => {
                let existing = self
                    .watchlist_repository
                    .find_entry(user_id, title_id)
                    .await?
                    .ok_or_else(|| DomainError::Internal {
                        message: "duplicate watchlist entry vanished during re-fetch".to_string(),
                    })?;
                Ok((existing, false))
            }
            Err(e) => Err(e),
        }
    }

    /// Update status and/or episode progress on a user's entry
    ///
    /// Only the owning user's entry is visible: a foreign (user, title) pair
    /// is `EntryNotFound`, never another user's data.
    ///
    /// # Returns
    ///
    /// * `Ok(ListEntry)` - The updated entry
    /// * `Err(DomainError)` - `EntryNotFound`, `InvalidProgress`, or
    ///   persistence failure
    pub async fn update_progress(
        &self,
        user_id: Uuid,
        title_id: Uuid,
        update: ProgressUpdate,
    ) -> DomainResult<ListEntry> {
        let mut entry = self
            .watchlist_repository
            .find_entry(user_id, title_id)
            .await?
            .ok_or(DomainError::Watchlist(WatchlistError::EntryNotFound))?;

        let title = self.require_title(title_id).await?;
        apply_update(&mut entry, update, &title)?;

        self.watchlist_repository.update(entry).await
    }

    /// Remove a title from a user's list; idempotent
    pub async fn remove(&self, user_id: Uuid, title_id: Uuid) -> DomainResult<()> {
        let deleted = self.watchlist_repository.delete(user_id, title_id).await?;
        if deleted {
            debug!(%user_id, %title_id, "watchlist entry removed");
        }
        Ok(())
    }

    /// All entries on a user's list
    pub async fn list_for_user(&self, user_id: Uuid) -> DomainResult<Vec<ListEntry>> {
        self.watchlist_repository.find_by_user(user_id).await
    }

    async fn require_title(&self, title_id: Uuid) -> DomainResult<Title> {
        self.title_repository
            .find_by_id(title_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Title".to_string(),
            })
    }
}

/// Apply a partial update, validating episodes against the known total
fn apply_update(entry: &mut ListEntry, update: ProgressUpdate, title: &Title) -> DomainResult<()> {
    if let Some(episodes) = update.episodes_watched {
        if let Some(total) = title.total_episodes {
            if episodes > total {
                return Err(DomainError::Watchlist(WatchlistError::InvalidProgress {
                    episodes,
                    total,
                }));
            }
        }
        entry.set_episodes_watched(episodes);
    }
    if let Some(status) = update.status {
        entry.set_status(status);
    }
    Ok(())
}
