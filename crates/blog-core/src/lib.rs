//! # Blog Core
//!
//! The domain layer of the blog service: the `Blog` entity, its validation
//! rules, the repository port and the create-authorization policy.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod policy;
pub mod ports;
pub mod service;
pub mod time;

pub use error::{BlogField, DomainError};
pub use service::BlogService;
