//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use blog_core::time;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub blogs: usize,
}

/// Health check endpoint - returns server status and the number of stored blogs.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.count().await?;

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: time::to_iso_string(&time::now()),
        blogs,
    }))
}
