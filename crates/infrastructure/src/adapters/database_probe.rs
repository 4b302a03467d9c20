//! Database service probe

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::{DatabaseHealthPort, ServiceCheck, ServiceProbePort};
use async_trait::async_trait;
use tracing::{debug, instrument, warn};

/// Probes the database through a `DatabaseHealthPort`
///
/// In demo mode the database is reported healthy without being touched.
pub struct DatabaseProbe {
    health: Option<Arc<dyn DatabaseHealthPort>>,
}

impl std::fmt::Debug for DatabaseProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseProbe")
            .field("demo_mode", &self.health.is_none())
            .finish()
    }
}

impl DatabaseProbe {
    /// Probe backed by a live health check
    pub fn live(health: Arc<dyn DatabaseHealthPort>) -> Self {
        Self {
            health: Some(health),
        }
    }

    /// Probe that always reports demo mode
    pub const fn demo() -> Self {
        Self { health: None }
    }
}

#[async_trait]
impl ServiceProbePort for DatabaseProbe {
    #[instrument(skip(self))]
    async fn probe(&self) -> Result<ServiceCheck, ApplicationError> {
        let Some(health) = &self.health else {
            return Ok(ServiceCheck::demo_mode());
        };

        let report = health.check_health().await?;
        if report.reachable {
            debug!(
                version = report.version.as_deref().unwrap_or("unknown"),
                response_time_ms = ?report.response_time_ms,
                "Database reachable"
            );
            Ok(ServiceCheck::healthy())
        } else {
            warn!("Database unreachable");
            Ok(ServiceCheck::unhealthy())
        }
    }
}
