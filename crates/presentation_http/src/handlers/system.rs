//! Service info and fallback handlers

use axum::{
    Json,
    extract::State,
    http::{Method, Uri},
};
use domain::SuccessEnvelope;
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, state::AppState};

/// Public service name
pub const SERVICE_NAME: &str = "docintake";

/// Service identification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub environment: String,
}

/// Root endpoint
pub async fn index(State(state): State<AppState>) -> Json<SuccessEnvelope<ServiceInfo>> {
    Json(
        SuccessEnvelope::new(ServiceInfo {
            name: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: state.config.environment.to_string(),
        })
        .with_message(format!("{SERVICE_NAME} API")),
    )
}

/// Any route without a handler
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::not_found(format!("Route {method} {} not found", uri.path()))
}
