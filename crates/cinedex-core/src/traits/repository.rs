//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::pagination::SkipLimit;

/// Table-level operations shared by every entity store.
///
/// Inserts and updates take entity-specific payloads, so they live on the
/// concrete repository structs alongside the other entity-specific queries.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static + serde::Serialize,
    Id: Send + Sync + 'static,
{
    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;

    /// List entities in persistence order within the given window.
    async fn find_all(&self, page: &SkipLimit) -> AppResult<Vec<Entity>>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: Id) -> AppResult<bool>;

    /// Count total entities.
    async fn count(&self) -> AppResult<u64>;
}
