//! HTTP handlers and route configuration.

mod categories;
mod health;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(Some(err.to_string())).into()
    }))
    .service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/categories")
                    .route("", web::post().to(categories::create_category))
                    .route("", web::get().to(categories::list_categories))
                    .route("/{id}", web::get().to(categories::get_category))
                    .route("/{id}", web::put().to(categories::update_category))
                    .route("/{id}", web::patch().to(categories::patch_category))
                    .route("/{id}", web::delete().to(categories::delete_category)),
            ),
    );
}
