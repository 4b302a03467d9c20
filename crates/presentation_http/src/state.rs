//! Application state shared across handlers

use std::sync::Arc;
use std::time::Instant;

use application::{HealthService, WebhookIngestionService};
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Webhook ingestion pipeline
    pub webhook_service: Arc<WebhookIngestionService>,
    /// Health aggregation across dependent services
    pub health_service: Arc<HealthService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("webhook_service", &self.webhook_service)
            .field("health_service", &self.health_service)
            .field("environment", &self.config.environment)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        webhook_service: WebhookIngestionService,
        health_service: HealthService,
        config: AppConfig,
    ) -> Self {
        Self {
            webhook_service: Arc::new(webhook_service),
            health_service: Arc::new(health_service),
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the state was created
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
