use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use aw_core::domain::entities::watchlist::{ListEntry, WatchStatus};
use aw_core::services::watchlist::ProgressUpdate;

/// Body for adding a title to the list or updating an entry
///
/// Both fields are optional: an empty body on add yields the default
/// `planned` entry with zero episodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchlistEntryRequest {
    pub status: Option<WatchStatus>,
    pub episodes_watched: Option<u32>,
}

impl From<WatchlistEntryRequest> for ProgressUpdate {
    fn from(request: WatchlistEntryRequest) -> Self {
        Self {
            status: request.status,
            episodes_watched: request.episodes_watched,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistEntryResponse {
    pub title_id: Uuid,
    pub status: WatchStatus,
    pub episodes_watched: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ListEntry> for WatchlistEntryResponse {
    fn from(entry: ListEntry) -> Self {
        Self {
            title_id: entry.title_id,
            status: entry.status,
            episodes_watched: entry.episodes_watched,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}
