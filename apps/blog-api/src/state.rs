//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::BlogService;
use blog_core::policy::AuthorPolicy;
use blog_infra::{InMemoryBlogRepository, seed_sample_blogs};

use crate::config::AppConfig;

/// Shared application state. Every worker holds a clone; all clones point at
/// the same store.
#[derive(Clone)]
pub struct AppState {
    pub blogs: BlogService,
}

impl AppState {
    /// Build the state with an empty in-memory store, seeding it if configured.
    pub async fn new(config: &AppConfig) -> Self {
        let state = Self::in_memory(AuthorPolicy::new(config.allowed_author.clone()));

        if config.seed_sample_blogs {
            if let Err(e) = seed_sample_blogs(&state.blogs).await {
                tracing::error!("Failed to seed sample blogs: {}", e);
            }
        }

        tracing::info!(
            allowed_author = %config.allowed_author,
            "Application state initialized"
        );

        state
    }

    pub fn in_memory(policy: AuthorPolicy) -> Self {
        let repo = Arc::new(InMemoryBlogRepository::new());
        Self {
            blogs: BlogService::new(repo, policy),
        }
    }
}
