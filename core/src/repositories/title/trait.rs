//! Title repository trait for catalog point lookups.
//!
//! The catalog is maintained elsewhere; the watchlist only needs to resolve
//! a title id to its episode count, so the read surface is a single lookup.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::title::Title;
use crate::errors::DomainError;

/// Repository trait for Title lookups
#[async_trait]
pub trait TitleRepository: Send + Sync {
    /// Find a title by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Title))` - Title found
    /// * `Ok(None)` - No title with given ID
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Title>, DomainError>;
}
