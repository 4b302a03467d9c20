//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `database`: SQLite database settings and demo mode
//! - `services`: AI provider, SMS provider, processing collaborator, log sink
//!
//! Sources are layered: built-in defaults, then an optional `config.toml`,
//! then `DOCINTAKE_<SECTION>__<FIELD>` environment variables.

mod database;
mod server;
mod services;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use server::ServerConfig;
pub use services::{AiConfig, LogSinkConfig, ProcessingConfig, SmsConfig};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "DOCINTAKE";

/// Application environment (development or production)
///
/// Controls debug logging and whether error entries reach the log sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - debug logs on, no external log sink
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// AI provider credentials
    #[serde(default)]
    pub ai: AiConfig,

    /// SMS provider credentials
    #[serde(default)]
    pub sms: SmsConfig,

    /// Processing collaborator endpoint
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// External log sink
    #[serde(default)]
    pub log_sink: LogSinkConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = Self::defaults()?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., DOCINTAKE_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Parse configuration from a TOML document layered over the defaults
    pub fn from_toml(document: &str) -> Result<Self, config::ConfigError> {
        Self::defaults()?
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError>
    {
        let server = ServerConfig::default();
        config::Config::builder()
            .set_default("environment", Environment::default().to_string())?
            .set_default("server.host", server.host)?
            .set_default("server.port", i64::from(server.port))
    }

    pub const fn is_development(&self) -> bool {
        matches!(self.environment, Environment::Development)
    }
}
