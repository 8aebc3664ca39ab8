//! MySQL implementation of the TitleRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use aw_core::domain::entities::title::Title;
use aw_core::errors::DomainError;
use aw_core::repositories::TitleRepository;

/// MySQL implementation of TitleRepository
pub struct MySqlTitleRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTitleRepository {
    /// Create a new MySQL title repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Title entity
    fn row_to_title(row: &sqlx::mysql::MySqlRow) -> Result<Title, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(Title {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid title UUID: {}", e),
            })?,
            name_en: row.try_get("name_en").map_err(|e| DomainError::Internal {
                message: format!("Failed to get name_en: {}", e),
            })?,
            name_jp: row.try_get("name_jp").map_err(|e| DomainError::Internal {
                message: format!("Failed to get name_jp: {}", e),
            })?,
            total_episodes: row
                .try_get::<Option<u32>, _>("total_episodes")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get total_episodes: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl TitleRepository for MySqlTitleRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Title>, DomainError> {
        let query = r#"
            SELECT id, name_en, name_jp, total_episodes, created_at
            FROM titles
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::StoreUnavailable {
                message: format!("Failed to find title by id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_title(&row)?)),
            None => Ok(None),
        }
    }
}
