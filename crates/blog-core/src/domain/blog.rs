use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{BlogField, DomainError};
use crate::time;

/// Blog entity - a single post with identity that persists across updates.
///
/// Fields are private so a `Blog` can only be built through [`Blog::new`] and
/// changed through [`Blog::update`], both of which reject empty content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    id: Uuid,
    #[serde(serialize_with = "time::serialize_iso_seconds")]
    created_at: DateTime<Utc>,
    #[serde(serialize_with = "time::serialize_iso_seconds")]
    last_updated: DateTime<Utc>,
    title: String,
    body: String,
}

impl Blog {
    /// Create a new post with a generated id and both timestamps set to now.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let body = body.into();
        validate(&title, &body)?;

        let now = time::now();
        Ok(Self {
            id: Uuid::new_v4(),
            created_at: now,
            last_updated: now,
            title,
            body,
        })
    }

    /// Replace title and body together, or neither on error.
    pub fn update(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<(), DomainError> {
        let title = title.into();
        let body = body.into();
        validate(&title, &body)?;

        self.title = title;
        self.body = body;
        // Wall clock can step backwards; lastUpdated must not.
        self.last_updated = time::now().max(self.last_updated);
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

fn validate(title: &str, body: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation {
            field: BlogField::Title,
        });
    }
    if body.trim().is_empty() {
        return Err(DomainError::Validation {
            field: BlogField::Body,
        });
    }
    Ok(())
}
