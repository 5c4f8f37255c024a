use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use tripmate_api::{config::AppConfig, routes, services::openai_service::ChatCompletionClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };
    log::info!(
        "Using chat completion API at {} with model {} (key {})",
        config.openai_api_url,
        config.openai_model,
        config.masked_api_key()
    );

    let chat_client = web::Data::new(ChatCompletionClient::new(&config));
    let bind_addr = (config.host.clone(), config.port);
    let config = web::Data::new(config);

    log::info!("Binding HTTP server to {}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(routes::cors_headers())
            .app_data(config.clone())
            .app_data(chat_client.clone())
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
