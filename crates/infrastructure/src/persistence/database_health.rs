//! SQLite database health adapter
//!
//! Implements the `DatabaseHealthPort` with a lazily-connected sqlx pool,
//! so an unreachable database surfaces in health reports instead of at
//! startup.

use std::str::FromStr;
use std::time::{Duration, Instant};

use application::error::ApplicationError;
use application::ports::{DatabaseHealth, DatabaseHealthPort};
use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, instrument, warn};

use crate::config::DatabaseConfig;

/// Time allowed to obtain a pooled connection for a probe
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite database health adapter
#[derive(Debug, Clone)]
pub struct SqlxDatabaseHealth {
    pool: SqlitePool,
}

impl SqlxDatabaseHealth {
    /// Wrap an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Build a lazily-connected pool from configuration
    ///
    /// No connection is opened until the first probe.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, ApplicationError> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| ApplicationError::Configuration(format!("Invalid database URL: {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy_with(options);

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl DatabaseHealthPort for SqlxDatabaseHealth {
    #[instrument(skip(self))]
    async fn check_health(&self) -> Result<DatabaseHealth, ApplicationError> {
        let start = Instant::now();

        if let Err(e) = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
        {
            warn!(error = %e, "Database health check failed");
            return Ok(DatabaseHealth::unreachable());
        }

        let version: String = sqlx::query_scalar("SELECT sqlite_version()")
            .fetch_one(&self.pool)
            .await
            .unwrap_or_else(|_| "unknown".to_string());

        // Probe round trips are far below u64::MAX milliseconds
        #[allow(clippy::cast_possible_truncation)]
        let response_time_ms = start.elapsed().as_millis() as u64;

        debug!(
            version = %version,
            response_time_ms = response_time_ms,
            "Database health check passed"
        );

        Ok(DatabaseHealth::reachable()
            .with_version(format!("SQLite {version}"))
            .with_response_time(response_time_ms))
    }
}
