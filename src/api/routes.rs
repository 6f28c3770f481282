// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password generator
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
            .route("/strength", web::post().to(handlers::generator::analyze_password))
    );
}
