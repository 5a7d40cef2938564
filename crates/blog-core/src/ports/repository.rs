use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Blog;
use crate::error::DomainError;

/// Generic repository trait defining standard CRUD operations.
///
/// Implementations own their entities and hand out clones, never references
/// into the store.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// All entities in insertion order.
    async fn list_all(&self) -> Result<Vec<T>, DomainError>;

    /// Number of stored entities.
    async fn count(&self) -> Result<usize, DomainError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, DomainError>;

    /// Insert a new entity. Fails with `DuplicateId` if the ID is taken.
    async fn insert(&self, entity: T) -> Result<T, DomainError>;

    /// Delete an entity by its ID. Returns `false` when nothing matched.
    async fn delete(&self, id: ID) -> Result<bool, DomainError>;
}

/// Blog repository.
#[async_trait]
pub trait BlogRepository: BaseRepository<Blog, Uuid> {
    /// Apply [`Blog::update`] to the stored entity while holding the store's
    /// write lock, and return the updated copy.
    async fn update_content(
        &self,
        id: Uuid,
        title: String,
        body: String,
    ) -> Result<Blog, DomainError>;
}
