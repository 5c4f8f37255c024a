use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;

use crate::config::AppConfig;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(config: web::Data<AppConfig>) -> impl Responder {
    let openai = check_openai(&config);
    let status = if openai.status == "ok" { "ok" } else { "degraded" };

    let mut services = HashMap::new();
    services.insert("openai".to_string(), openai);

    HttpResponse::Ok().json(HealthStatus {
        status: status.to_string(),
        services,
        environment: config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// Configuration only; probing the upstream would spend tokens.
fn check_openai(config: &AppConfig) -> ServiceStatus {
    if config.openai_api_key.trim().is_empty() {
        return ServiceStatus {
            status: "error".to_string(),
            details: Some("OPENAI_API_KEY not configured".to_string()),
        };
    }

    ServiceStatus {
        status: "ok".to_string(),
        details: Some(format!(
            "Chat completion API configured ({}), model {}, key {}",
            config.openai_api_url,
            config.openai_model,
            config.masked_api_key()
        )),
    }
}
