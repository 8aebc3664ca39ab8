//! Watchlist entry entity tracking per-user, per-title watch progress.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Watch status of a title on a user's list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WatchStatus {
    /// On the wishlist, not started
    Planned,
    /// Currently watching
    Watching,
    /// Finished watching
    Completed,
    /// Decided not to continue
    Dropped,
    /// Paused, intending to resume
    OnHold,
}

impl std::fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WatchStatus::Planned => write!(f, "planned"),
            WatchStatus::Watching => write!(f, "watching"),
            WatchStatus::Completed => write!(f, "completed"),
            WatchStatus::Dropped => write!(f, "dropped"),
            WatchStatus::OnHold => write!(f, "on-hold"),
        }
    }
}

/// A single watchlist entry
///
/// Identified by the compound key `(user_id, title_id)`; at most one entry
/// exists per pair, enforced by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    /// Owner of the entry
    pub user_id: Uuid,

    /// Title this entry tracks
    pub title_id: Uuid,

    /// Current watch status
    pub status: WatchStatus,

    /// Number of episodes watched so far
    pub episodes_watched: u32,

    /// Timestamp when the entry was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the entry was last updated
    pub updated_at: DateTime<Utc>,
}

impl ListEntry {
    /// Creates a new entry with the default status and zero progress
    pub fn new(user_id: Uuid, title_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            title_id,
            status: WatchStatus::Planned,
            episodes_watched: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the watch status
    pub fn set_status(&mut self, status: WatchStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Sets the number of watched episodes
    pub fn set_episodes_watched(&mut self, episodes: u32) {
        self.episodes_watched = episodes;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_defaults() {
        let entry = ListEntry::new(Uuid::new_v4(), Uuid::new_v4());

        assert_eq!(entry.status, WatchStatus::Planned);
        assert_eq!(entry.episodes_watched, 0);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&WatchStatus::OnHold).unwrap(),
            "\"on-hold\""
        );
        assert_eq!(
            serde_json::from_str::<WatchStatus>("\"planned\"").unwrap(),
            WatchStatus::Planned
        );
    }

    #[test]
    fn test_mutators_bump_updated_at() {
        let mut entry = ListEntry::new(Uuid::new_v4(), Uuid::new_v4());
        let created = entry.updated_at;

        entry.set_status(WatchStatus::Watching);
        entry.set_episodes_watched(3);

        assert_eq!(entry.status, WatchStatus::Watching);
        assert_eq!(entry.episodes_watched, 3);
        assert!(entry.updated_at >= created);
    }
}
