//! Create-blog authorization.

use crate::error::DomainError;

/// The only actor allowed to publish when nothing else is configured.
pub const DEFAULT_AUTHOR: &str = "LarsG";

/// Single-author publishing rule: creating a blog requires the caller's actor
/// name to match the configured author exactly. Reads are never gated.
#[derive(Debug, Clone)]
pub struct AuthorPolicy {
    allowed_author: String,
}

impl AuthorPolicy {
    pub fn new(allowed_author: impl Into<String>) -> Self {
        Self {
            allowed_author: allowed_author.into(),
        }
    }

    pub fn allowed_author(&self) -> &str {
        &self.allowed_author
    }

    /// Comparison is exact: case and surrounding whitespace matter.
    pub fn authorize_create(&self, actor: &str) -> Result<(), DomainError> {
        if actor == self.allowed_author {
            Ok(())
        } else {
            Err(DomainError::Unauthorized {
                actor: actor.to_string(),
            })
        }
    }
}

impl Default for AuthorPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHOR)
    }
}
