//! Blog CRUD handlers.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use blog_shared::dto::{CreateBlogRequest, UpdateBlogRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Ids that are not UUIDs cannot name a stored blog, so they are reported as
/// not found rather than as a malformed request.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("Blog with id {} not found", raw)))
}

/// GET /blog
pub async fn list_blogs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let blogs = state.blogs.list().await?;
    Ok(HttpResponse::Ok().json(blogs))
}

/// GET /blog/{id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let blog = state.blogs.get(id).await?;
    Ok(HttpResponse::Ok().json(blog))
}

/// POST /blog
pub async fn create_blog(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let blog = state
        .blogs
        .create(&req.user_name, &req.title, &req.body)
        .await?;

    tracing::info!(blog_id = %blog.id(), "Blog created");

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/blog/{}", blog.id())))
        .json(blog))
}

/// PUT /blog/{id}
pub async fn update_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateBlogRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();

    let blog = state.blogs.update(id, &req.title, &req.body).await?;
    Ok(HttpResponse::Ok().json(blog))
}

/// DELETE /blog/{id}
pub async fn delete_blog(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    if state.blogs.delete(id).await? {
        tracing::info!(blog_id = %id, "Blog deleted");
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound(format!("Blog with id {} not found", id)))
    }
}
