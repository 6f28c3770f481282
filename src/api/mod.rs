// src/api/mod.rs
use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

use crate::core::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::analyze_password,
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisRequest,
            crate::api::types::PasswordAnalysisResponse,
            crate::models::GenerationConfig,
            crate::generators::strength::StrengthReport,
            crate::generators::strength::StrengthLabel,
            crate::generators::strength::StrengthBand,
            crate::generators::strength::Criterion,
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and strength endpoints")
    ),
    info(
        title = "RustPassgen API",
        version = "0.1.0",
        description = "Random password generation and strength scoring",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let address = config.web_address.clone();
    let port = config.web_port;
    log::info!("Starting RustPassgen API server on {}:{}", address, port);

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
