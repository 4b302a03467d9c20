//! Fallback processor used when no processing endpoint is configured

use application::error::ApplicationError;
use application::ports::MessageProcessorPort;
use async_trait::async_trait;
use domain::{InboundMessage, ProcessingResult};
use tracing::info;

/// Accepts every message without a reply text, so the default
/// confirmation is sent back to the sender
#[derive(Debug, Clone, Copy, Default)]
pub struct AcknowledgingProcessor;

#[async_trait]
impl MessageProcessorPort for AcknowledgingProcessor {
    async fn process(&self, message: &InboundMessage) -> Result<ProcessingResult, ApplicationError> {
        info!(
            media = message.media_count(),
            "No processing endpoint configured; acknowledging message"
        );
        Ok(ProcessingResult::acknowledged())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[tokio::test]
    async fn acknowledges_without_reply_text() {
        let message = InboundMessage {
            from: "+15551234567".into(),
            body: "Hello".into(),
            media_urls: Vec::new(),
            timestamp: Utc::now(),
        };
        let result = AcknowledgingProcessor.process(&message).await.unwrap();
        assert!(result.success);
        assert!(result.reply().is_none());
    }
}
