//! Title entity describing a catalog anime title.
//!
//! The catalog itself (search, browse, editorial metadata) lives outside this
//! service; watch-progress validation only needs the episode count, so the
//! entity is limited to what list mutations read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An anime title referenced by watchlist entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    /// Unique identifier for the title
    pub id: Uuid,

    /// English name
    pub name_en: String,

    /// Japanese name, when known
    pub name_jp: Option<String>,

    /// Total episode count; `None` while the run is ongoing or unannounced
    pub total_episodes: Option<u32>,

    /// Timestamp when the title was added to the catalog
    pub created_at: DateTime<Utc>,
}

impl Title {
    /// Creates a new title
    pub fn new(name_en: String, name_jp: Option<String>, total_episodes: Option<u32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name_en,
            name_jp,
            total_episodes,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_title() {
        let title = Title::new(
            "Cowboy Bebop".to_string(),
            Some("カウボーイビバップ".to_string()),
            Some(26),
        );

        assert_eq!(title.name_en, "Cowboy Bebop");
        assert_eq!(title.total_episodes, Some(26));
    }

    #[test]
    fn test_title_without_total_episodes() {
        let title = Title::new("One Piece".to_string(), None, None);
        assert!(title.total_episodes.is_none());
    }
}
