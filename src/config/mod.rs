//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `WAYFINDER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use wayfinder::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod ai;
mod database;
mod error;
mod redis;
mod search;
mod server;

pub use ai::AiConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use redis::RedisConfig;
pub use search::SearchConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has workable defaults, so a bare environment yields a
/// fully in-process demo deployment. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, timeout, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (Gemini)
    #[serde(default)]
    pub ai: AiConfig,

    /// Search collaborator configuration (Elasticsearch), optional
    #[serde(default)]
    pub search: SearchConfig,

    /// Database configuration (PostgreSQL), optional for the demo
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Cache configuration (Redis conversation store), optional for the demo
    #[serde(default)]
    pub redis: RedisConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WAYFINDER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WAYFINDER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `WAYFINDER__AI__API_KEY=...` -> `ai.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WAYFINDER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.search.validate()?;
        self.database.validate()?;
        self.redis.validate()?;
        Ok(())
    }
}
