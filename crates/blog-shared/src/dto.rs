//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Request to publish a new blog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    /// Actor asserting the write.
    pub user_name: String,
    pub title: String,
    pub body: String,
}

/// Request to replace a blog's title and body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    pub title: String,
    pub body: String,
}
