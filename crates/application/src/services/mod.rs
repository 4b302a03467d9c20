//! Application services - Use case implementations

mod health_service;
mod webhook_service;

pub use health_service::{HealthReport, HealthService, OverallStatus, ServiceChecks};
pub use webhook_service::{
    DEFAULT_REPLY, PROCESSING_FAILED_MESSAGE, WebhookIngestionService, WebhookReply,
    extract_media_urls, parse_media_count,
};
