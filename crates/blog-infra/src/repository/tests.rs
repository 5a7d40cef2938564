use std::sync::Arc;
use std::time::Duration;

use blog_core::domain::Blog;
use blog_core::policy::AuthorPolicy;
use blog_core::ports::{BaseRepository, BlogRepository};
use blog_core::{BlogService, DomainError};
use uuid::Uuid;

use super::InMemoryBlogRepository;

fn service() -> (Arc<InMemoryBlogRepository>, BlogService) {
    let repo = Arc::new(InMemoryBlogRepository::new());
    let service = BlogService::new(repo.clone(), AuthorPolicy::default());
    (repo, service)
}

#[tokio::test]
async fn test_insert_and_find() {
    let repo = InMemoryBlogRepository::new();
    let blog = Blog::new("title", "body").unwrap();

    let saved = repo.insert(blog.clone()).await.unwrap();
    assert_eq!(saved, blog);

    let found = repo.find_by_id(blog.id()).await.unwrap();
    assert_eq!(found, Some(blog));
    assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
}

#[tokio::test]
async fn test_insert_rejects_duplicate_id() {
    let repo = InMemoryBlogRepository::new();
    let blog = Blog::new("title", "body").unwrap();

    repo.insert(blog.clone()).await.unwrap();
    let err = repo.insert(blog.clone()).await.unwrap_err();

    assert!(matches!(err, DomainError::DuplicateId { id } if id == blog.id()));
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_list_preserves_insertion_order() {
    let repo = InMemoryBlogRepository::new();
    let titles = ["first", "second", "third"];
    for title in titles {
        repo.insert(Blog::new(title, "body").unwrap()).await.unwrap();
    }

    let listed: Vec<String> = repo
        .list_all()
        .await
        .unwrap()
        .iter()
        .map(|b| b.title().to_string())
        .collect();
    assert_eq!(listed, titles);
}

#[tokio::test]
async fn test_delete() {
    let repo = InMemoryBlogRepository::new();
    let keep = repo.insert(Blog::new("keep", "body").unwrap()).await.unwrap();
    let gone = repo.insert(Blog::new("gone", "body").unwrap()).await.unwrap();

    assert!(repo.delete(gone.id()).await.unwrap());
    assert_eq!(repo.find_by_id(gone.id()).await.unwrap(), None);

    assert!(!repo.delete(gone.id()).await.unwrap());
    assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
    assert_eq!(repo.list_all().await.unwrap(), vec![keep]);
}

#[tokio::test]
async fn test_update_content() {
    let repo = InMemoryBlogRepository::new();
    let blog = repo.insert(Blog::new("old", "old body").unwrap()).await.unwrap();

    // Timestamps have whole-second precision.
    tokio::time::sleep(Duration::from_millis(1100)).await;

    let updated = repo
        .update_content(blog.id(), "new".to_string(), "new body".to_string())
        .await
        .unwrap();

    assert_eq!(updated.id(), blog.id());
    assert_eq!(updated.created_at(), blog.created_at());
    assert_eq!(updated.title(), "new");
    assert_eq!(updated.body(), "new body");
    assert!(updated.last_updated() > blog.last_updated());
    assert_eq!(repo.find_by_id(blog.id()).await.unwrap(), Some(updated));
}

#[tokio::test]
async fn test_update_content_invalid_leaves_store_unchanged() {
    let repo = InMemoryBlogRepository::new();
    let blog = repo.insert(Blog::new("old", "old body").unwrap()).await.unwrap();

    let err = repo
        .update_content(blog.id(), "new".to_string(), "   ".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Validation { .. }));
    assert_eq!(repo.find_by_id(blog.id()).await.unwrap(), Some(blog));
}

#[tokio::test]
async fn test_update_content_unknown_id() {
    let repo = InMemoryBlogRepository::new();
    let id = Uuid::new_v4();

    let err = repo
        .update_content(id, "t".to_string(), "b".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::NotFound { id: missing } if missing == id));
}

#[tokio::test]
async fn test_service_create_and_get() {
    let (_, service) = service();

    let created = service.create("LarsG", "title", "body").await.unwrap();
    assert_eq!(created.created_at(), created.last_updated());

    let fetched = service.get(created.id()).await.unwrap();
    assert_eq!(fetched, created);

    let err = service.get(Uuid::new_v4()).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_service_create_invalid_adds_nothing() {
    let (repo, service) = service();

    for (title, body) in [("", "body"), ("title", " "), ("\t", "\n")] {
        let err = service.create("LarsG", title, body).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_service_checks_author_before_content() {
    let (repo, service) = service();

    let err = service.create("Eve", "title", "body").await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized { .. }));

    // Invalid content from an unauthorized actor still reports Unauthorized.
    let err = service.create("Eve", "", "").await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized { .. }));

    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_service_update_and_delete() {
    let (_, service) = service();
    let blog = service.create("LarsG", "title", "body").await.unwrap();

    let updated = service.update(blog.id(), "edited", "edited body").await.unwrap();
    assert_eq!(updated.title(), "edited");

    let err = service.update(blog.id(), "", "x").await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
    assert_eq!(service.get(blog.id()).await.unwrap(), updated);

    assert!(service.delete(blog.id()).await.unwrap());
    assert!(service.get(blog.id()).await.unwrap_err().is_not_found());
    assert!(!service.delete(blog.id()).await.unwrap());
}

#[tokio::test]
async fn test_two_blogs_and_rejected_author() {
    let (_, service) = service();

    let high_tides = service.create("LarsG", "High Tides", "body1").await.unwrap();
    let full_moon = service.create("LarsG", "Full Moon", "body2").await.unwrap();

    let all = service.list().await.unwrap();
    assert_eq!(all, vec![high_tides.clone(), full_moon.clone()]);

    let fetched = service.get(high_tides.id()).await.unwrap();
    assert_eq!((fetched.title(), fetched.body()), ("High Tides", "body1"));
    let fetched = service.get(full_moon.id()).await.unwrap();
    assert_eq!((fetched.title(), fetched.body()), ("Full Moon", "body2"));

    let err = service.create("Eve", "Sneaky", "post").await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized { .. }));
    assert_eq!(service.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_concurrent_creates_are_all_stored() {
    let (repo, service) = service();

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create("LarsG", &format!("post {i}"), "body")
                    .await
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(repo.len().await, 32);
}

#[tokio::test]
async fn test_count_tracks_inserts_and_deletes() {
    let (_, service) = service();
    assert_eq!(service.count().await.unwrap(), 0);

    let blog = service.create("LarsG", "title", "body").await.unwrap();
    service.create("LarsG", "second", "body").await.unwrap();
    assert_eq!(service.count().await.unwrap(), 2);

    service.delete(blog.id()).await.unwrap();
    assert_eq!(service.count().await.unwrap(), 1);
}
