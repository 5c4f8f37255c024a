use std::env;

use crate::error::ConfigError;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4.1-2025-04-14";

/// Process configuration, read once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub openai_model: String,
    pub environment: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw.clone(),
            })?,
            Err(_) => PORT,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| HOST.to_string()),
            port,
            openai_api_key,
            openai_api_url: env::var("OPENAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_URL.to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            environment: env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string()),
        })
    }

    /// Config pointing at an arbitrary upstream, used by tests and local mocks.
    pub fn for_upstream(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            openai_api_key: api_key.into(),
            openai_api_url: api_url.into(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            environment: "test".to_string(),
        }
    }

    /// The API key with everything but its ends hidden, for logs and health output.
    pub fn masked_api_key(&self) -> String {
        let key = &self.openai_api_key;
        if key.len() > 8 && key.is_ascii() {
            format!("{}***{}", &key[0..4], &key[key.len() - 4..])
        } else {
            "***".to_string()
        }
    }
}
