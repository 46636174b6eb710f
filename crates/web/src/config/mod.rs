//! Server configuration module

use clap::Parser;

use crate::config::{db::DatabaseConfig, http::HttpConfig, logging::LoggingConfig};

pub(crate) mod db;
pub(crate) mod http;
pub(crate) mod logging;

/// eshop web server configuration
#[derive(Debug, Parser)]
#[command(name = "eshop-web", about = "eshop storefront server", long_about = None)]
pub struct ServerConfig {
    /// Listener and session cookie settings.
    #[command(flatten)]
    pub http: HttpConfig,

    /// Log output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
