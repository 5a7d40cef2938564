//! # Blog Shared
//!
//! Wire types shared by the server and its clients.

pub mod dto;
pub mod response;

pub use dto::{CreateBlogRequest, UpdateBlogRequest};
pub use response::ErrorResponse;
