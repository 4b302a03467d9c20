//! Inbound SMS message after validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A validated message delivered by the SMS provider
///
/// Sender and body are always non-empty; a payload that fails validation
/// never becomes an `InboundMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundMessage {
    /// Sender identifier as reported by the provider (usually E.164)
    pub from: String,
    /// Message text
    pub body: String,
    /// Absolute media URLs in provider order
    pub media_urls: Vec<String>,
    /// When the message was received
    pub timestamp: DateTime<Utc>,
}

impl InboundMessage {
    /// Whether any media was attached
    pub fn has_media(&self) -> bool {
        !self.media_urls.is_empty()
    }

    /// Number of attached media items
    pub fn media_count(&self) -> usize {
        self.media_urls.len()
    }
}
