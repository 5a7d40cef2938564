//! In-memory blog repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::Blog;
use blog_core::ports::{BaseRepository, BlogRepository};

/// In-memory blog store using a `Vec` behind an async RwLock.
///
/// The `Vec` keeps insertion order for listing; lookups are linear. Every
/// operation takes the single lock, so a reader never observes a half-applied
/// update.
pub struct InMemoryBlogRepository {
    store: RwLock<Vec<Blog>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Blog, Uuid> for InMemoryBlogRepository {
    async fn list_all(&self) -> Result<Vec<Blog>, DomainError> {
        let store = self.store.read().await;
        Ok(store.to_vec())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.len().await)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, DomainError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|blog| blog.id() == id).cloned())
    }

    async fn insert(&self, blog: Blog) -> Result<Blog, DomainError> {
        let mut store = self.store.write().await;

        if store.iter().any(|existing| existing.id() == blog.id()) {
            tracing::error!(blog_id = %blog.id(), "Refusing to insert blog with duplicate id");
            return Err(DomainError::DuplicateId { id: blog.id() });
        }

        tracing::debug!(blog_id = %blog.id(), "Blog inserted");
        store.push(blog.clone());
        Ok(blog)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut store = self.store.write().await;

        match store.iter().position(|blog| blog.id() == id) {
            Some(index) => {
                store.remove(index);
                tracing::debug!(blog_id = %id, "Blog deleted");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn update_content(
        &self,
        id: Uuid,
        title: String,
        body: String,
    ) -> Result<Blog, DomainError> {
        let mut store = self.store.write().await;

        let blog = store
            .iter_mut()
            .find(|blog| blog.id() == id)
            .ok_or(DomainError::NotFound { id })?;

        blog.update(title, body)?;
        tracing::debug!(blog_id = %id, "Blog updated");
        Ok(blog.clone())
    }
}
