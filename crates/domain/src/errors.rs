//! Error taxonomy shared by every layer
//!
//! `AppError` is the only failure shape that reaches the wire. Anything that
//! goes wrong while handling a request is normalized into one before a
//! response is rendered, so every route fails with the same contract.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::envelope::ErrorEnvelope;

/// Message used when a failure carries no usable description
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Closed set of failure kinds, each pinning a status code and code string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Input failed schema validation
    Validation,
    /// Caller could not be identified
    Authentication,
    /// Caller is known but not allowed
    Authorization,
    /// Referenced resource does not exist
    NotFound,
    /// Request conflicts with current state
    Conflict,
    /// Failure with a known message but no more specific kind
    Internal,
    /// Failure that carried nothing recognizable
    Unknown,
}

impl ErrorKind {
    /// HTTP status code pinned to this kind
    pub const fn status_code(self) -> u16 {
        match self {
            Self::Validation => 400,
            Self::Authentication => 401,
            Self::Authorization => 403,
            Self::NotFound => 404,
            Self::Conflict => 409,
            Self::Internal | Self::Unknown => 500,
        }
    }

    /// Machine-readable code string pinned to this kind
    pub const fn code(self) -> &'static str {
        match self {
            Self::Validation => "VALIDATION_ERROR",
            Self::Authentication => "AUTHENTICATION_ERROR",
            Self::Authorization => "AUTHORIZATION_ERROR",
            Self::NotFound => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::Internal => "INTERNAL_ERROR",
            Self::Unknown => "UNKNOWN_ERROR",
        }
    }

    /// Kind whose pinned status matches `status`, falling back to `Internal`
    pub const fn for_status(status: u16) -> Self {
        match status {
            400 => Self::Validation,
            401 => Self::Authentication,
            403 => Self::Authorization,
            404 => Self::NotFound,
            409 => Self::Conflict,
            _ => Self::Internal,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validation => "validation",
            Self::Authentication => "authentication",
            Self::Authorization => "authorization",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Internal => "internal",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A tagged, wire-ready failure
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    kind: ErrorKind,
    message: String,
    status_code: u16,
    code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl AppError {
    /// Base error with an explicit status and code
    ///
    /// Used when a collaborator assigns its own status. The kind is derived
    /// from the status where one of the fixed kinds matches it.
    pub fn new(message: impl Into<String>, status_code: u16, code: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::for_status(status_code),
            message: message.into(),
            status_code,
            code: code.into(),
            details: None,
        }
    }

    /// Error of a fixed kind, taking its status and code from the kind
    pub fn of_kind(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: kind.status_code(),
            code: kind.code().to_string(),
            details: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::of_kind(ErrorKind::Validation, message)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::of_kind(ErrorKind::Authentication, message)
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        Self::of_kind(ErrorKind::Authorization, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::of_kind(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::of_kind(ErrorKind::Conflict, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::of_kind(ErrorKind::Internal, message)
    }

    /// Failure with no recognizable content
    pub fn unknown() -> Self {
        Self::of_kind(ErrorKind::Unknown, UNKNOWN_ERROR_MESSAGE)
    }

    /// Attach structured details (e.g. the list of validation violations)
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Normalize an arbitrary failure
    ///
    /// An `AppError` passes through unchanged. Any other failure with a
    /// message becomes `Internal` preserving that message; a failure with
    /// an empty message becomes `Unknown`.
    pub fn normalize(error: anyhow::Error) -> Self {
        match error.downcast::<Self>() {
            Ok(app_error) => app_error,
            Err(other) => Self::from_message(other.to_string()),
        }
    }

    /// Normalize the payload of a caught panic
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        if let Some(message) = payload.downcast_ref::<&str>() {
            Self::from_message((*message).to_string())
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self::from_message(message.clone())
        } else {
            Self::unknown()
        }
    }

    fn from_message(message: String) -> Self {
        if message.trim().is_empty() {
            Self::unknown()
        } else {
            Self::internal(message)
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub const fn details(&self) -> Option<&serde_json::Value> {
        self.details.as_ref()
    }

    /// Render the `{success:false, error:{…}}` envelope
    pub fn to_envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_pin_status_codes() {
        assert_eq!(ErrorKind::Validation.status_code(), 400);
        assert_eq!(ErrorKind::Authentication.status_code(), 401);
        assert_eq!(ErrorKind::Authorization.status_code(), 403);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::Conflict.status_code(), 409);
        assert_eq!(ErrorKind::Internal.status_code(), 500);
        assert_eq!(ErrorKind::Unknown.status_code(), 500);
    }

    #[test]
    fn kinds_pin_codes() {
        assert_eq!(ErrorKind::Validation.code(), "VALIDATION_ERROR");
        assert_eq!(ErrorKind::NotFound.code(), "NOT_FOUND");
        assert_eq!(ErrorKind::Unknown.code(), "UNKNOWN_ERROR");
    }

    #[test]
    fn constructor_takes_status_from_kind() {
        let err = AppError::conflict("already exists");
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.code(), "CONFLICT");
        assert_eq!(err.message(), "already exists");
        assert!(err.details().is_none());
    }

    #[test]
    fn base_error_keeps_custom_status() {
        let err = AppError::new("slow down", 429, "RATE_LIMITED");
        assert_eq!(err.status_code(), 429);
        assert_eq!(err.code(), "RATE_LIMITED");
        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[test]
    fn base_error_derives_matching_kind() {
        let err = AppError::new("missing", 404, "DOC_MISSING");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn display_is_the_message() {
        let err = AppError::validation("body: must not be empty");
        assert_eq!(err.to_string(), "body: must not be empty");
    }

    #[test]
    fn normalize_passes_app_error_through() {
        let original = AppError::authorization("nope")
            .with_details(serde_json::json!({"resource": "document"}));
        let normalized = AppError::normalize(anyhow::Error::new(original.clone()));
        assert_eq!(normalized, original);
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = AppError::normalize(anyhow::anyhow!("disk full"));
        let twice = AppError::normalize(anyhow::Error::new(once.clone()));
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_wraps_generic_failure_as_internal() {
        let err = AppError::normalize(anyhow::anyhow!("connection reset"));
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.message(), "connection reset");
    }

    #[test]
    fn normalize_empty_message_is_unknown() {
        let err = AppError::normalize(anyhow::anyhow!(""));
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert_eq!(err.message(), UNKNOWN_ERROR_MESSAGE);
    }

    #[test]
    fn panic_with_str_payload_is_internal() {
        let payload: Box<dyn Any + Send> = Box::new("index out of range");
        let err = AppError::from_panic(payload.as_ref());
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert_eq!(err.message(), "index out of range");
    }

    #[test]
    fn panic_with_string_payload_is_internal() {
        let payload: Box<dyn Any + Send> = Box::new(String::from("boom"));
        let err = AppError::from_panic(payload.as_ref());
        assert_eq!(err.message(), "boom");
    }

    #[test]
    fn panic_with_opaque_payload_is_unknown() {
        let payload: Box<dyn Any + Send> = Box::new(42_u32);
        let err = AppError::from_panic(payload.as_ref());
        assert_eq!(err.kind(), ErrorKind::Unknown);
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn kind_display_is_snake_case() {
        assert_eq!(ErrorKind::NotFound.to_string(), "not_found");
        assert_eq!(ErrorKind::Validation.to_string(), "validation");
    }
}
