//! Schema validation for untrusted input
//!
//! Turns an untyped JSON record into a typed schema value, or fails with a
//! single `Validation` error listing every violation found in one pass.
//! Unknown fields are ignored so providers can add fields freely.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use domain::{AppError, InboundMessage};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationError, ValidationErrors};

/// Payload schema for inbound SMS webhooks
///
/// Missing sender or body default to empty strings so they are reported as
/// length violations alongside any other problem, rather than aborting
/// deserialization at the first missing field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "sender is required"))]
    pub from: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "message body is required"))]
    pub body: String,

    #[serde(default)]
    #[validate(custom(function = "validate_media_urls"))]
    pub media_urls: Vec<String>,

    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl WebhookPayload {
    /// Convert into the domain message, stamping the receipt time if absent
    pub fn into_message(self) -> InboundMessage {
        InboundMessage {
            from: self.from,
            body: self.body,
            media_urls: self.media_urls,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
        }
    }
}

fn validate_media_urls(urls: &[String]) -> Result<(), ValidationError> {
    let invalid: Vec<usize> = urls
        .iter()
        .enumerate()
        .filter(|(_, raw)| url::Url::parse(raw).is_err())
        .map(|(index, _)| index)
        .collect();

    if invalid.is_empty() {
        return Ok(());
    }

    let positions = invalid
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let mut error = ValidationError::new("url");
    error.message = Some(Cow::Owned(format!(
        "media URLs at positions {positions} are not absolute URLs"
    )));
    error.add_param(Cow::Borrowed("positions"), &invalid);
    Err(error)
}

/// Parse and validate `input` against schema `T`
pub fn validate<T>(input: Value) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let value: T = serde_json::from_value(input).map_err(|e| {
        AppError::validation(format!("Validation failed: {e}")).with_details(json!([{
            "field": Value::Null,
            "code": "type",
            "message": e.to_string(),
        }]))
    })?;

    value.validate().map_err(|errors| violations_to_error(&errors))?;
    Ok(value)
}

fn violations_to_error(errors: &ValidationErrors) -> AppError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut summary = Vec::new();
    let mut details = Vec::new();
    for (field, field_errors) in fields {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map_or_else(|| error.code.to_string(), ToString::to_string);
            summary.push(format!("{field}: {message}"));
            details.push(json!({
                "field": field,
                "code": error.code,
                "message": message,
            }));
        }
    }

    AppError::validation(format!("Validation failed: {}", summary.join("; ")))
        .with_details(Value::Array(details))
}

#[cfg(test)]
mod tests {
    use domain::ErrorKind;

    use super::*;

    #[test]
    fn valid_payload_passes() {
        let payload: WebhookPayload = validate(json!({
            "from": "+15551234567",
            "body": "Hello",
            "mediaUrls": ["https://api.example.com/media/1"],
        }))
        .unwrap();
        assert_eq!(payload.from, "+15551234567");
        assert_eq!(payload.media_urls.len(), 1);
    }

    #[test]
    fn media_defaults_to_empty() {
        let payload: WebhookPayload =
            validate(json!({"from": "+15551234567", "body": "Hi"})).unwrap();
        assert!(payload.media_urls.is_empty());
        assert!(payload.timestamp.is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let result: Result<WebhookPayload, _> = validate(json!({
            "from": "+15551234567",
            "body": "Hi",
            "accountSid": "AC123",
        }));
        assert!(result.is_ok());
    }

    #[test]
    fn missing_sender_and_body_are_both_reported() {
        let err = validate::<WebhookPayload>(json!({})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.status_code(), 400);
        assert!(err.message().contains("from"));
        assert!(err.message().contains("body"));
        assert_eq!(err.details().and_then(Value::as_array).map(Vec::len), Some(2));
    }

    #[test]
    fn empty_body_is_rejected() {
        let err = validate::<WebhookPayload>(json!({"from": "+15551234567", "body": ""}))
            .unwrap_err();
        assert!(err.message().contains("message body is required"));
    }

    #[test]
    fn relative_media_url_is_rejected() {
        let err = validate::<WebhookPayload>(json!({
            "from": "+15551234567",
            "body": "Hi",
            "mediaUrls": ["https://ok.example.com/a", "/relative/path", "not a url"],
        }))
        .unwrap_err();
        assert!(err.message().contains("positions 1, 2"));
    }

    #[test]
    fn all_violations_collected_in_one_pass() {
        let err = validate::<WebhookPayload>(json!({
            "body": "",
            "mediaUrls": ["nope"],
        }))
        .unwrap_err();
        let details = err.details().and_then(Value::as_array).unwrap();
        assert_eq!(details.len(), 3);
    }

    #[test]
    fn wrong_type_is_a_validation_error() {
        let err = validate::<WebhookPayload>(json!({"from": 42, "body": "x"})).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn timestamp_is_kept_when_present() {
        let payload: WebhookPayload = validate(json!({
            "from": "+15551234567",
            "body": "Hi",
            "timestamp": "2024-05-01T12:00:00Z",
        }))
        .unwrap();
        let message = payload.into_message();
        assert_eq!(message.timestamp.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[test]
    fn timestamp_defaults_to_now() {
        let before = Utc::now();
        let payload: WebhookPayload =
            validate(json!({"from": "+15551234567", "body": "Hi"})).unwrap();
        let message = payload.into_message();
        assert!(message.timestamp >= before);
    }
}
