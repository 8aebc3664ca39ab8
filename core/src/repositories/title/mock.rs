//! Mock implementation of TitleRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::title::Title;
use crate::errors::DomainError;

use super::trait_::TitleRepository;

/// Mock title repository for testing
pub struct MockTitleRepository {
    titles: Arc<RwLock<HashMap<Uuid, Title>>>,
}

impl MockTitleRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            titles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed a title into the mock catalog, returning its id
    pub async fn insert(&self, title: Title) -> Uuid {
        let id = title.id;
        self.titles.write().await.insert(id, title);
        id
    }
}

impl Default for MockTitleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TitleRepository for MockTitleRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Title>, DomainError> {
        let titles = self.titles.read().await;
        Ok(titles.get(&id).cloned())
    }
}
