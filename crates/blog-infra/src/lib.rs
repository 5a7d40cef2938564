//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! Storage is in-memory only; data is lost on process restart.

pub mod repository;
pub mod seed;

pub use repository::InMemoryBlogRepository;
pub use seed::seed_sample_blogs;
