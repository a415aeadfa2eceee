//! API configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use core_kernel::CoreError;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level or filter directive
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Load the demonstration claims at startup
    pub seed_sample_claims: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            seed_sample_claims: true,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables.
    ///
    /// The bare `PORT` variable is used when `API_PORT` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(
            Environment::with_prefix("API").try_parsing(true),
            std::env::var("PORT").ok(),
        )
    }

    /// Loads configuration from the given environment source
    pub fn load(env: Environment, port_fallback: Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let port = port_fallback
            .and_then(|p| p.trim().parse::<u16>().ok())
            .unwrap_or(defaults.port);

        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "pretty")?
            .set_default("seed_sample_claims", defaults.seed_sample_claims)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// Checks values the deserializer cannot
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.host.trim().is_empty() {
            return Err(CoreError::configuration("host must not be empty"));
        }
        if self.log_level.trim().is_empty() {
            return Err(CoreError::configuration("log_level must not be empty"));
        }
        Ok(())
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
