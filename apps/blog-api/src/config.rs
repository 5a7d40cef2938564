//! Application configuration loaded from environment variables.

use std::env;

use blog_core::policy::DEFAULT_AUTHOR;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Actor name allowed to publish new blogs.
    pub allowed_author: String,
    /// Publish the sample posts at startup.
    pub seed_sample_blogs: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            allowed_author: lookup("BLOG_ALLOWED_AUTHOR")
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            seed_sample_blogs: lookup("SEED_SAMPLE_BLOGS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
