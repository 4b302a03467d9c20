//! Health aggregation service
//!
//! Probes the database, the AI provider, and the SMS provider independently
//! and rolls the results into one report. A failing or panicking probe only
//! marks its own service unhealthy.

use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::AppError;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

use crate::logger::Logger;
use crate::ports::{ServiceCheck, ServiceProbePort};

/// Rolled-up status of the whole system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    /// Every check passed
    Healthy,
    /// At least one check failed
    Degraded,
    /// The aggregation itself failed
    Unhealthy,
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Unhealthy => "unhealthy",
        };
        f.write_str(label)
    }
}

/// Per-service outcomes for the three probed categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceChecks {
    pub database: ServiceCheck,
    pub ai: ServiceCheck,
    pub sms: ServiceCheck,
}

impl ServiceChecks {
    pub const fn all_unhealthy() -> Self {
        Self {
            database: ServiceCheck::unhealthy(),
            ai: ServiceCheck::unhealthy(),
            sms: ServiceCheck::unhealthy(),
        }
    }

    pub const fn all_healthy(&self) -> bool {
        self.database.healthy && self.ai.healthy && self.sms.healthy
    }
}

/// Health report created fresh for every request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: OverallStatus,
    pub timestamp: DateTime<Utc>,
    pub services: ServiceChecks,
}

impl HealthReport {
    /// Report whose status follows from the checks
    pub fn from_checks(services: ServiceChecks) -> Self {
        let status = if services.all_healthy() {
            OverallStatus::Healthy
        } else {
            OverallStatus::Degraded
        };
        Self {
            status,
            timestamp: Utc::now(),
            services,
        }
    }

    /// Report for a failed aggregation
    pub fn unhealthy() -> Self {
        Self {
            status: OverallStatus::Unhealthy,
            timestamp: Utc::now(),
            services: ServiceChecks::all_unhealthy(),
        }
    }
}

/// Service for aggregating health checks across the dependent services
pub struct HealthService {
    database: Arc<dyn ServiceProbePort>,
    ai: Arc<dyn ServiceProbePort>,
    sms: Arc<dyn ServiceProbePort>,
    logger: Logger,
}

impl fmt::Debug for HealthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HealthService")
            .field("database", &"<ServiceProbePort>")
            .field("ai", &"<ServiceProbePort>")
            .field("sms", &"<ServiceProbePort>")
            .finish_non_exhaustive()
    }
}

impl HealthService {
    pub fn new(
        database: Arc<dyn ServiceProbePort>,
        ai: Arc<dyn ServiceProbePort>,
        sms: Arc<dyn ServiceProbePort>,
        logger: Logger,
    ) -> Self {
        Self {
            database,
            ai,
            sms,
            logger,
        }
    }

    /// Check all services
    ///
    /// Never fails: an unexpected failure of the aggregation yields an
    /// `Unhealthy` report.
    #[instrument(skip(self))]
    pub async fn check_all(&self) -> HealthReport {
        match AssertUnwindSafe(self.aggregate()).catch_unwind().await {
            Ok(report) => report,
            Err(payload) => {
                // The logger may be what failed, so report straight to tracing
                let err = AppError::from_panic(payload.as_ref());
                error!(error = %err, "Health check aggregation failed");
                HealthReport::unhealthy()
            },
        }
    }

    async fn aggregate(&self) -> HealthReport {
        let (database, ai, sms) = tokio::join!(
            self.run_probe("database", self.database.as_ref()),
            self.run_probe("ai", self.ai.as_ref()),
            self.run_probe("sms", self.sms.as_ref()),
        );

        let report = HealthReport::from_checks(ServiceChecks { database, ai, sms });
        debug!(status = %report.status, "Health check complete");
        report
    }

    async fn run_probe(&self, service: &str, probe: &dyn ServiceProbePort) -> ServiceCheck {
        match AssertUnwindSafe(probe.probe()).catch_unwind().await {
            Ok(Ok(check)) => check,
            Ok(Err(e)) => {
                self.logger
                    .error(format!("{service} health check failed"), &e);
                ServiceCheck::unhealthy()
            },
            Err(payload) => {
                let err = AppError::from_panic(payload.as_ref());
                self.logger
                    .error(format!("{service} health check failed"), &err);
                ServiceCheck::unhealthy()
            },
        }
    }
}
