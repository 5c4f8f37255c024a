pub mod generate_plan;
pub mod health;

use actix_web::{middleware::DefaultHeaders, web};

pub const GENERATE_PLAN_PATH: &str = "/functions/v1/generate-travel-plan";

/// CORS headers carried by every response, preflight or not.
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", generate_plan::ALLOW_ORIGIN))
        .add(("Access-Control-Allow-Headers", generate_plan::ALLOW_HEADERS))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::resource(GENERATE_PLAN_PATH)
                .route(web::post().to(generate_plan::generate))
                .route(web::method(actix_web::http::Method::OPTIONS).to(generate_plan::preflight)),
        );
}
