use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub paypal: PayPalConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// Externally reachable base URL, used for subscription return/cancel links
    pub public_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PayPalConfig {
    pub client_id: String,
    pub client_secret: String,
    pub base_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                public_url: env::var("PUBLIC_URL")
                    .unwrap_or_else(|_| "http://localhost:8080".to_string())
                    .trim_end_matches('/')
                    .to_string(),
            },
            server: ServerConfig::from_env()?,
            paypal: PayPalConfig {
                client_id: env::var("PAYPAL_CLIENT_ID").map_err(|_| {
                    AppError::Configuration("PAYPAL_CLIENT_ID not set".to_string())
                })?,
                client_secret: env::var("PAYPAL_CLIENT_SECRET").map_err(|_| {
                    AppError::Configuration("PAYPAL_CLIENT_SECRET not set".to_string())
                })?,
                base_url: env::var("PAYPAL_BASE_URL")
                    .unwrap_or_else(|_| "https://api-m.sandbox.paypal.com".to_string())
                    .trim_end_matches('/')
                    .to_string(),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.paypal.client_id.is_empty() {
            return Err(AppError::Configuration(
                "PayPal client id must not be empty".to_string(),
            ));
        }

        if self.paypal.client_secret.is_empty() {
            return Err(AppError::Configuration(
                "PayPal client secret must not be empty".to_string(),
            ));
        }

        if !self.paypal.base_url.starts_with("http") {
            return Err(AppError::Configuration(format!(
                "Invalid PAYPAL_BASE_URL: {}",
                self.paypal.base_url
            )));
        }

        Ok(())
    }
}
