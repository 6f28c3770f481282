// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};

use crate::api::types::{
    PasswordAnalysisRequest, PasswordAnalysisResponse,
    PasswordGenerationRequest, PasswordGenerationResponse,
};
use crate::core::Config;
use crate::generators::{PasswordGenerator, StrengthReport};
use crate::models::{GenerationConfig, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Generate a password
///
/// Generates a random password from the requested character classes.
/// Lowercase letters are always included.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid options", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let defaults = config.generation_defaults();

    let length = generation_req.length.unwrap_or(defaults.length as i64);
    if length < MIN_PASSWORD_LENGTH as i64 || length > MAX_PASSWORD_LENGTH as i64 {
        return HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(format!(
            "Password length must be between {} and {} characters",
            MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH
        )));
    }

    let options = GenerationConfig::new(
        length as usize,
        generation_req.include_uppercase.unwrap_or(defaults.include_uppercase),
        generation_req.include_digits.unwrap_or(defaults.include_digits),
        generation_req.include_symbols.unwrap_or(defaults.include_symbols),
    );

    let password = PasswordGenerator::new().generate_password(&options);
    let strength = StrengthReport::analyze(&password);
    log::debug!("Generated password over API: length={} score={}", options.length, strength.score);

    HttpResponse::Ok().json(PasswordGenerationResponse {
        success: true,
        password: Some(password),
        strength: Some(strength),
        config: Some(options),
        error: None,
    })
}

/// Analyze password strength
///
/// Scores a password 0-5 and lists the criteria it misses.
#[utoipa::path(
    post,
    path = "/generator/strength",
    tag = "Generator",
    request_body = PasswordAnalysisRequest,
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze_password(analysis_req: web::Json<PasswordAnalysisRequest>) -> impl Responder {
    let report = StrengthReport::analyze(&analysis_req.password);
    HttpResponse::Ok().json(PasswordAnalysisResponse::from(report))
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::json;

    use crate::api::routes::configure_routes;
    use crate::api::types::{PasswordAnalysisResponse, PasswordGenerationResponse};
    use crate::core::Config;
    use crate::generators::strength::{StrengthBand, StrengthLabel};

    macro_rules! app {
        ($config:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($config))
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn generates_alphanumeric_password() {
        let app = app!(Config::default());
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(json!({
                "length": 12,
                "include_uppercase": true,
                "include_digits": true,
                "include_symbols": false
            }))
            .to_request();

        let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;
        assert!(resp.success);
        let password = resp.password.unwrap();
        assert_eq!(password.len(), 12);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_eq!(resp.strength.unwrap().score, crate::generators::score(&password));
    }

    #[actix_web::test]
    async fn empty_request_uses_configured_defaults() {
        let config = Config {
            default_password_length: 20,
            default_include_uppercase: false,
            ..Config::default()
        };
        let app = app!(config);
        let req = test::TestRequest::post()
            .uri("/generator/password")
            .set_json(json!({}))
            .to_request();

        let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;
        let password = resp.password.unwrap();
        assert_eq!(password.len(), 20);
        assert!(password.chars().all(|c| c.is_ascii_lowercase()));
        assert_eq!(resp.config.unwrap().length, 20);
    }

    #[actix_web::test]
    async fn out_of_range_length_is_rejected() {
        let app = app!(Config::default());
        for length in [5, 31, -1] {
            let req = test::TestRequest::post()
                .uri("/generator/password")
                .set_json(json!({ "length": length }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[actix_web::test]
    async fn scores_password() {
        let app = app!(Config::default());
        let req = test::TestRequest::post()
            .uri("/generator/strength")
            .set_json(json!({ "password": "Abcdefg1" }))
            .to_request();

        let resp: PasswordAnalysisResponse = test::call_and_read_body_json(&app, req).await;
        assert!(resp.success);
        assert_eq!(resp.score, 4);
        assert_eq!(resp.label, StrengthLabel::Strong);
        assert_eq!(resp.band, StrengthBand::Medium);
        assert_eq!(resp.feedback.len(), 2);
    }

    #[actix_web::test]
    async fn empty_password_scores_zero() {
        let app = app!(Config::default());
        let req = test::TestRequest::post()
            .uri("/generator/strength")
            .set_json(json!({ "password": "" }))
            .to_request();

        let resp: PasswordAnalysisResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.score, 0);
        assert_eq!(resp.label, StrengthLabel::TooWeak);
        assert_eq!(resp.unmet.len(), 5);
    }
}
