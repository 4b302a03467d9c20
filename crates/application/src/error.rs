//! Application-level errors

use domain::AppError;
use thiserror::Error;

/// Errors reported by ports and their adapters
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Already-normalized failure
    #[error(transparent)]
    Domain(#[from] AppError),

    /// External service could not be reached or answered garbage
    #[error("External service error: {0}")]
    ExternalService(String),

    /// External service answered with an error status
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Referenced resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller could not be identified
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Caller is not allowed to perform the operation
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Operation conflicts with current state
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ApplicationError> for AppError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Domain(e) => e,
            ApplicationError::Upstream { status, message } => {
                Self::new(message, status, "UPSTREAM_ERROR")
            },
            ApplicationError::NotFound(msg) => Self::not_found(msg),
            ApplicationError::NotAuthorized(msg) => Self::authentication(msg),
            ApplicationError::Forbidden(msg) => Self::authorization(msg),
            ApplicationError::Conflict(msg) => Self::conflict(msg),
            other @ (ApplicationError::ExternalService(_)
            | ApplicationError::Configuration(_)
            | ApplicationError::Internal(_)) => Self::internal(other.to_string()),
        }
    }
}

/// Normalize any failure raised while handling a request
///
/// Recognizes `ApplicationError` before falling back to
/// [`AppError::normalize`], so port failures keep their mapped status.
pub fn normalize_failure(error: anyhow::Error) -> AppError {
    match error.downcast::<ApplicationError>() {
        Ok(app_err) => app_err.into(),
        Err(other) => AppError::normalize(other),
    }
}
