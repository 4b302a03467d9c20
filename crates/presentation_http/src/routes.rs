//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Service info
        .route("/", get(handlers::system::index))
        // Health
        .route("/api/health", get(handlers::health::health_check))
        .route("/health", get(handlers::health::health_check))
        // SMS provider webhook
        .route("/api/webhooks/sms", post(handlers::sms::handle_sms_webhook))
        .fallback(handlers::system::not_found)
        // Attach state
        .with_state(state)
}

/// Router with the HTTP middleware stack applied
///
/// Layer order (outermost first): request id, tracing, body limit.
pub fn create_app(state: AppState) -> Router {
    let max_body = state.config.server.max_body_size_bytes;
    create_router(state)
        .layer(RequestBodyLimitLayer::new(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer)
}
