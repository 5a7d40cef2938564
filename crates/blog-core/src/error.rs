//! Domain-level error types.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// The user-supplied field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogField {
    Title,
    Body,
}

impl fmt::Display for BlogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlogField::Title => write!(f, "title"),
            BlogField::Body => write!(f, "body"),
        }
    }
}

/// Domain errors - business logic failures.
///
/// The `Display` text of each variant is safe to hand to API clients.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Title or body is empty or whitespace-only. The offending field is kept
    /// for logging and is deliberately absent from the message.
    #[error("Invalid title or body")]
    Validation { field: BlogField },

    #[error("User has no rights to add blogs")]
    Unauthorized { actor: String },

    #[error("Blog with id {id} not found")]
    NotFound { id: Uuid },

    /// An id collided on insert. Only an id-generation defect can cause this.
    #[error("Duplicate blog id {id}")]
    DuplicateId { id: Uuid },
}

impl DomainError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::NotFound { .. })
    }
}
