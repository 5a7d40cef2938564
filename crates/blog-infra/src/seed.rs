//! Sample content for a fresh store.

use blog_core::{BlogService, DomainError};

const SAMPLE_BLOGS: [(&str, &str); 2] = [
    ("High Tides", "A stormy Saturday afternoon..."),
    (
        "Full Moon",
        "Nothing beats watching the sun get overtaken by the moon...",
    ),
];

/// Publish the sample posts as the service's allowed author, going through
/// the same authorization and validation as any other create.
pub async fn seed_sample_blogs(service: &BlogService) -> Result<usize, DomainError> {
    let author = service.policy().allowed_author().to_string();

    for (title, body) in SAMPLE_BLOGS {
        service.create(&author, title, body).await?;
    }

    tracing::info!(count = SAMPLE_BLOGS.len(), "Seeded sample blogs");
    Ok(SAMPLE_BLOGS.len())
}
