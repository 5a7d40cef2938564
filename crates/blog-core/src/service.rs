//! Blog use cases - the operations exposed to the transport layer.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::Blog;
use crate::error::DomainError;
use crate::policy::AuthorPolicy;
use crate::ports::BlogRepository;

/// Composes the repository with the create-authorization rule.
///
/// Cloning is cheap; clones share the same store.
#[derive(Clone)]
pub struct BlogService {
    repo: Arc<dyn BlogRepository>,
    policy: AuthorPolicy,
}

impl BlogService {
    pub fn new(repo: Arc<dyn BlogRepository>, policy: AuthorPolicy) -> Self {
        Self { repo, policy }
    }

    pub fn policy(&self) -> &AuthorPolicy {
        &self.policy
    }

    pub async fn list(&self) -> Result<Vec<Blog>, DomainError> {
        self.repo.list_all().await
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repo.count().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Blog, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound { id })
    }

    /// Authorization runs first so a rejected actor learns nothing about
    /// whether the payload was valid.
    pub async fn create(&self, actor: &str, title: &str, body: &str) -> Result<Blog, DomainError> {
        self.policy.authorize_create(actor)?;
        let blog = Blog::new(title, body)?;
        self.repo.insert(blog).await
    }

    pub async fn update(&self, id: Uuid, title: &str, body: &str) -> Result<Blog, DomainError> {
        self.repo
            .update_content(id, title.to_string(), body.to_string())
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.repo.delete(id).await
    }
}
