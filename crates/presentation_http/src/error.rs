//! API error handling
//!
//! JSON routes answer failures with the error envelope
//! `{"success":false,"error":{...}}` and the status pinned by the error kind.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::{AppError, ErrorEnvelope};
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] AppError);

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self(AppError::not_found(message))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorEnvelope::from(&self.0))).into_response()
    }
}
