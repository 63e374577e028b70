//! HTTP handlers and route configuration.

mod health;
mod images;
mod posts;
mod tags;


use actix_web::web;

use crate::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check));
    cfg.service(
        web::scope("/Posts")
            .route("", web::get().to(posts::list_posts))
            .route("", web::post().to(posts::create_post))
            .route("/{id}", web::get().to(posts::get_post))
            .route("/{id}", web::put().to(posts::update_post))
            .route("/{id}", web::patch().to(posts::patch_post))
            .route("/{id}", web::delete().to(posts::delete_post))
            .route("/{id}/Image", web::post().to(images::upload_image))
            .route("/{id}/Image", web::get().to(images::get_image))
            .route("/{id}/Image", web::delete().to(images::delete_image))
            .route("/{id}/Tags", web::post().to(tags::add_tag))
            .route("/{id}/Tags/{tag}", web::delete().to(tags::remove_tag)),
    );
}

/// The 404 reported whenever the addressed post does not exist.
pub(crate) fn post_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Post Id={id} not found"))
}
