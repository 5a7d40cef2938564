//! HTTP handlers and route configuration.

mod blog;
mod health;

use actix_web::{ResponseError, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/blog")
                .route(web::get().to(blog::list_blogs))
                .route(web::post().to(blog::create_blog)),
        )
        .service(
            web::resource("/blog/{id}")
                .route(web::get().to(blog::get_blog))
                .route(web::put().to(blog::update_blog))
                .route(web::delete().to(blog::delete_blog)),
        );
}

/// JSON extractor config: malformed or incomplete bodies become problem-detail 400s.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let app_err = AppError::BadRequest(err.to_string());
        actix_web::error::InternalError::from_response(err, app_err.error_response()).into()
    })
}
