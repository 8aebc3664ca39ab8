//! MySQL implementation of the WatchlistRepository trait.
//!
//! The `watchlist_entries` table carries a primary key on
//! `(user_id, title_id)`; that constraint is what serializes concurrent
//! creations of the same entry. A duplicate-key insert comes back as
//! `WatchlistError::DuplicateEntry` for the service layer to resolve.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use aw_core::domain::entities::watchlist::{ListEntry, WatchStatus};
use aw_core::errors::{DomainError, WatchlistError};
use aw_core::repositories::WatchlistRepository;

use super::is_duplicate_key;

/// MySQL implementation of WatchlistRepository
pub struct MySqlWatchlistRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlWatchlistRepository {
    /// Create a new MySQL watchlist repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to ListEntry entity
    fn row_to_entry(row: &sqlx::mysql::MySqlRow) -> Result<ListEntry, DomainError> {
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get user_id: {}", e),
        })?;
        let title_id: String = row.try_get("title_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get title_id: {}", e),
        })?;
        let status: String = row.try_get("status").map_err(|e| DomainError::Internal {
            message: format!("Failed to get status: {}", e),
        })?;

        Ok(ListEntry {
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            title_id: Uuid::parse_str(&title_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid title UUID: {}", e),
            })?,
            status: status_from_column(&status)?,
            episodes_watched: row
                .try_get::<u32, _>("episodes_watched")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get episodes_watched: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl WatchlistRepository for MySqlWatchlistRepository {
    async fn find_entry(
        &self,
        user_id: Uuid,
        title_id: Uuid,
    ) -> Result<Option<ListEntry>, DomainError> {
        let query = r#"
            SELECT user_id, title_id, status, episodes_watched, created_at, updated_at
            FROM watchlist_entries
            WHERE user_id = ? AND title_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(title_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("Failed to find watchlist entry: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_entry(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<ListEntry>, DomainError> {
        let query = r#"
            SELECT user_id, title_id, status, episodes_watched, created_at, updated_at
            FROM watchlist_entries
            WHERE user_id = ?
            ORDER BY created_at
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("Failed to list watchlist entries: {}", e),
            })?;

        rows.iter().map(Self::row_to_entry).collect()
    }

    async fn insert(&self, entry: ListEntry) -> Result<ListEntry, DomainError> {
        let query = r#"
            INSERT INTO watchlist_entries
                (user_id, title_id, status, episodes_watched, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(entry.user_id.to_string())
            .bind(entry.title_id.to_string())
            .bind(entry.status.to_string())
            .bind(entry.episodes_watched)
            .bind(entry.created_at)
            .bind(entry.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    DomainError::Watchlist(WatchlistError::DuplicateEntry)
                } else {
                    DomainError::StoreUnavailable {
                        message: format!("Failed to insert watchlist entry: {}", e),
                    }
                }
            })?;

        Ok(entry)
    }

    async fn update(&self, entry: ListEntry) -> Result<ListEntry, DomainError> {
        let query = r#"
            UPDATE watchlist_entries
            SET status = ?, episodes_watched = ?, updated_at = ?
            WHERE user_id = ? AND title_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(entry.status.to_string())
            .bind(entry.episodes_watched)
            .bind(entry.updated_at)
            .bind(entry.user_id.to_string())
            .bind(entry.title_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("Failed to update watchlist entry: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::Watchlist(WatchlistError::EntryNotFound));
        }

        Ok(entry)
    }

    async fn delete(&self, user_id: Uuid, title_id: Uuid) -> Result<bool, DomainError> {
        let result =
            sqlx::query("DELETE FROM watchlist_entries WHERE user_id = ? AND title_id = ?")
                .bind(user_id.to_string())
                .bind(title_id.to_string())
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::StoreUnavailable {
                    message: format!("Failed to delete watchlist entry: {}", e),
                })?;

        Ok(result.rows_affected() > 0)
    }
}

/// Parse the status column back into the domain enum
fn status_from_column(value: &str) -> Result<WatchStatus, DomainError> {
    match value {
        "planned" => Ok(WatchStatus::Planned),
        "watching" => Ok(WatchStatus::Watching),
        "completed" => Ok(WatchStatus::Completed),
        "dropped" => Ok(WatchStatus::Dropped),
        "on-hold" => Ok(WatchStatus::OnHold),
        other => Err(DomainError::Internal {
            message: format!("Unknown watch status in database: {}", other),
        }),
    }
}
