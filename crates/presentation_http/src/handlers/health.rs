//! Health check handler

use application::{HealthReport, OverallStatus, ServiceState};
use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::state::AppState;

/// Status label per dependent service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLabels {
    pub database: ServiceState,
    pub ai: ServiceState,
    pub sms: ServiceState,
}

/// Pass/fail per dependent service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFlags {
    pub database: bool,
    pub ai: bool,
    pub sms: bool,
}

/// Health check response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: OverallStatus,
    pub timestamp: DateTime<Utc>,
    /// Seconds since startup
    pub uptime: u64,
    pub environment: String,
    pub version: String,
    pub services: ServiceLabels,
    pub checks: ServiceFlags,
}

impl HealthResponse {
    pub fn from_report(report: &HealthReport, uptime: u64, environment: impl Into<String>) -> Self {
        let s = &report.services;
        Self {
            status: report.status,
            timestamp: report.timestamp,
            uptime,
            environment: environment.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            services: ServiceLabels {
                database: s.database.state,
                ai: s.ai.state,
                sms: s.sms.state,
            },
            checks: ServiceFlags {
                database: s.database.healthy,
                ai: s.ai.healthy,
                sms: s.sms.healthy,
            },
        }
    }
}

/// Transport status for an overall health status
pub const fn status_code(status: OverallStatus) -> StatusCode {
    match status {
        OverallStatus::Healthy => StatusCode::OK,
        OverallStatus::Degraded => StatusCode::SERVICE_UNAVAILABLE,
        OverallStatus::Unhealthy => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Aggregate health of the database, AI provider, and SMS provider
#[instrument(skip(state))]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let report = state.health_service.check_all().await;
    let response = HealthResponse::from_report(
        &report,
        state.uptime_secs(),
        state.config.environment.to_string(),
    );
    (status_code(report.status), Json(response))
}

#[cfg(test)]
mod tests {
    use application::{ServiceCheck, ServiceChecks};
    use serde_json::json;

    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(status_code(OverallStatus::Healthy), StatusCode::OK);
        assert_eq!(
            status_code(OverallStatus::Degraded),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_code(OverallStatus::Unhealthy),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_shape() {
        let report = HealthReport::from_checks(ServiceChecks {
            database: ServiceCheck::demo_mode(),
            ai: ServiceCheck::not_configured(),
            sms: ServiceCheck::healthy(),
        });
        let response = HealthResponse::from_report(&report, 12, "development");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["status"], "degraded");
        assert_eq!(value["uptime"], 12);
        assert_eq!(value["environment"], "development");
        assert_eq!(
            value["services"],
            json!({"database": "demo_mode", "ai": "not_configured", "sms": "healthy"})
        );
        assert_eq!(
            value["checks"],
            json!({"database": true, "ai": false, "sms": true})
        );
        assert!(value["timestamp"].is_string());
        assert!(value["version"].is_string());
    }
}
