//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the HTTP processing
//! collaborator, the log sink, service probes, and the SQLite health check.
//! Also owns configuration loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod http;
pub mod persistence;
pub mod telemetry;

pub use adapters::*;
pub use config::{
    AiConfig, AppConfig, DatabaseConfig, Environment, LogSinkConfig, ProcessingConfig,
    ServerConfig, SmsConfig,
};
pub use http::HttpClientConfig;
pub use persistence::SqlxDatabaseHealth;
pub use telemetry::{TelemetryError, init_tracing};
