//! Inbound SMS webhook ingestion
//!
//! Receives the provider's form fields, validates them into an
//! [`InboundMessage`], dispatches it to the processing collaborator, and
//! reduces every possible outcome to a [`WebhookReply`]. Nothing escapes as
//! an unhandled fault: errors and panics alike end in an error reply.

use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use anyhow::anyhow;
use domain::{AppError, InboundMessage, LogEntry, LogLevel};
use futures::FutureExt;
use serde_json::{Map, Value, json};
use tracing::{debug, info, instrument};

use crate::error::normalize_failure;
use crate::logger::Logger;
use crate::ports::MessageProcessorPort;
use crate::validation::{WebhookPayload, validate};

/// Reply text when the processor succeeds without supplying one
pub const DEFAULT_REPLY: &str =
    "Thanks! We received your message and are processing your document.";

/// Failure text when the processor fails without giving a reason
pub const PROCESSING_FAILED_MESSAGE: &str = "Failed to process message";

const FIELD_FROM: &str = "From";
const FIELD_BODY: &str = "Body";
const FIELD_NUM_MEDIA: &str = "NumMedia";
const FIELD_MEDIA_URL_PREFIX: &str = "MediaUrl";

/// Terminal state of one webhook delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookReply {
    /// Transport status code (200 on success)
    pub status_code: u16,
    /// Text shown to the sender
    pub message: String,
}

impl WebhookReply {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            message: message.into(),
        }
    }

    pub fn failure(error: &AppError) -> Self {
        Self {
            status_code: error.status_code(),
            message: error.message().to_string(),
        }
    }

    pub const fn is_success(&self) -> bool {
        self.status_code < 400
    }
}

/// Parse the declared media count
///
/// Absent means zero; anything that is not a non-negative decimal is `None`.
pub fn parse_media_count(raw: Option<&str>) -> Option<usize> {
    raw.map_or(Some(0), |value| value.trim().parse().ok())
}

/// Collect `MediaUrl{i}` for `i < count` in index order
///
/// Missing indices are skipped rather than reported.
pub fn extract_media_urls(fields: &HashMap<String, String>, count: usize) -> Vec<String> {
    let mut indexed: Vec<(usize, &String)> = fields
        .iter()
        .filter_map(|(key, value)| {
            let suffix = key.strip_prefix(FIELD_MEDIA_URL_PREFIX)?;
            let index: usize = suffix.parse().ok()?;
            // "MediaUrl01" is not the same field as "MediaUrl1"
            (index < count && index.to_string() == suffix).then_some((index, value))
        })
        .collect();
    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, url)| url.clone()).collect()
}

/// Orchestrates one webhook delivery from raw fields to reply
pub struct WebhookIngestionService {
    processor: Arc<dyn MessageProcessorPort>,
    logger: Logger,
}

impl std::fmt::Debug for WebhookIngestionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookIngestionService")
            .field("processor", &"<MessageProcessorPort>")
            .field("logger", &self.logger)
            .finish()
    }
}

impl WebhookIngestionService {
    pub fn new(processor: Arc<dyn MessageProcessorPort>, logger: Logger) -> Self {
        Self { processor, logger }
    }

    /// Handle one delivery; never fails
    #[instrument(skip(self, form), fields(field_count = form.len()))]
    pub async fn handle(&self, form: &HashMap<String, String>) -> WebhookReply {
        match AssertUnwindSafe(self.ingest(form)).catch_unwind().await {
            Ok(Ok(reply)) => {
                info!("SMS webhook processed");
                WebhookReply::success(reply)
            },
            Ok(Err(failure)) => {
                self.log_failure(form, &format!("{failure:#}"));
                WebhookReply::failure(&normalize_failure(failure))
            },
            Err(payload) => {
                // Panic payloads are logged, never shown to the sender
                self.log_failure(form, &AppError::from_panic(payload.as_ref()));
                WebhookReply::failure(&AppError::internal(PROCESSING_FAILED_MESSAGE))
            },
        }
    }

    async fn ingest(&self, fields: &HashMap<String, String>) -> anyhow::Result<String> {
        let record = self.receive(fields);
        let message: InboundMessage = validate::<WebhookPayload>(record)?.into_message();

        debug!(
            media_count = message.media_count(),
            body_len = message.body.len(),
            "Dispatching inbound message"
        );

        let result = self.processor.process(&message).await?;

        if !result.success {
            let reason = result.failure_reason().unwrap_or(PROCESSING_FAILED_MESSAGE);
            return Err(anyhow!("{reason}"));
        }

        Ok(result
            .reply()
            .map_or_else(|| DEFAULT_REPLY.to_string(), ToString::to_string))
    }

    /// Build the untyped record handed to validation
    fn receive(&self, fields: &HashMap<String, String>) -> Value {
        let declared = fields.get(FIELD_NUM_MEDIA).map(String::as_str);
        let count = parse_media_count(declared).unwrap_or_else(|| {
            self.logger.warn(format!(
                "Ignoring unparseable {FIELD_NUM_MEDIA} value '{}'",
                declared.unwrap_or_default()
            ));
            0
        });

        let mut record = Map::new();
        if let Some(from) = fields.get(FIELD_FROM) {
            record.insert("from".to_string(), Value::String(from.clone()));
        }
        if let Some(body) = fields.get(FIELD_BODY) {
            record.insert("body".to_string(), Value::String(body.clone()));
        }
        record.insert(
            "mediaUrls".to_string(),
            json!(extract_media_urls(fields, count)),
        );
        Value::Object(record)
    }

    fn log_failure(&self, fields: &HashMap<String, String>, error: &dyn std::fmt::Display) {
        let mut context = Map::new();
        if let Some(from) = fields.get(FIELD_FROM) {
            context.insert("from".to_string(), Value::String(from.clone()));
        }
        self.logger.log(
            LogEntry::new(LogLevel::Error, "Error processing SMS webhook")
                .with_context(context)
                .with_error(error),
        );
    }
}
