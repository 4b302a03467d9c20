//! Database health check port
//!
//! Lets the database probe check connectivity without coupling to a
//! specific driver.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Database health information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseHealth {
    /// Whether the database answered the probe query
    pub reachable: bool,
    /// Server version string, if the driver exposes one
    pub version: Option<String>,
    /// Round-trip time of the probe in milliseconds
    pub response_time_ms: Option<u64>,
}

impl DatabaseHealth {
    #[must_use]
    pub const fn reachable() -> Self {
        Self {
            reachable: true,
            version: None,
            response_time_ms: None,
        }
    }

    #[must_use]
    pub const fn unreachable() -> Self {
        Self {
            reachable: false,
            version: None,
            response_time_ms: None,
        }
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub const fn with_response_time(mut self, ms: u64) -> Self {
        self.response_time_ms = Some(ms);
        self
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait DatabaseHealthPort: Send + Sync {
    /// Run a lightweight query (e.g. `SELECT 1`) and report the outcome
    async fn check_health(&self) -> Result<DatabaseHealth, ApplicationError>;
}
