use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    /// Endpoint receiving calendar events. Events are only logged when unset.
    pub calendar_webhook_url: Option<reqwest::Url>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let calendar_webhook_url = match std::env::var("CALENDAR_WEBHOOK_URL") {
            Ok(url) if !url.trim().is_empty() => Some(reqwest::Url::parse(url.trim()).map_err(
                |e| ConfigError::InvalidEnvVar {
                    name: "CALENDAR_WEBHOOK_URL".to_string(),
                    reason: e.to_string(),
                },
            )?),
            _ => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            calendar_webhook_url,
        })
    }
}
