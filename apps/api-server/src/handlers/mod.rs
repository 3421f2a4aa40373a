//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Post resource
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create))
                    .route("", web::get().to(posts::list))
                    .route("/{slug}", web::get().to(posts::get_by_slug))
                    .route("/{slug}", web::put().to(posts::update_by_slug))
                    .route("/{slug}", web::delete().to(posts::delete_by_slug)),
            ),
    );
}
