//! HTTP processing collaborator adapter
//!
//! POSTs the validated message as JSON and reads back a `ProcessingResult`.

use std::time::Duration;

use application::error::ApplicationError;
use application::ports::MessageProcessorPort;
use async_trait::async_trait;
use domain::{InboundMessage, ProcessingResult};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::ProcessingConfig;
use crate::http::HttpClientConfig;

/// Error body an upstream processor may answer with
#[derive(Debug, Default, Deserialize)]
struct UpstreamErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl UpstreamErrorBody {
    fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|m| !m.trim().is_empty())
    }
}

/// Processing collaborator reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpMessageProcessor {
    client: Client,
    endpoint: String,
}

impl HttpMessageProcessor {
    /// Create a processor posting to `endpoint`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApplicationError> {
        let client = HttpClientConfig::default()
            .with_timeout(timeout)
            .build()
            .map_err(|e| ApplicationError::Configuration(format!("HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Create a processor from configuration, if an endpoint is set
    pub fn from_config(config: &ProcessingConfig) -> Result<Option<Self>, ApplicationError> {
        config
            .endpoint()
            .map(|endpoint| Self::new(endpoint, Duration::from_secs(config.timeout_secs)))
            .transpose()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl MessageProcessorPort for HttpMessageProcessor {
    #[instrument(skip(self, message), fields(endpoint = %self.endpoint, media = message.media_count()))]
    async fn process(&self, message: &InboundMessage) -> Result<ProcessingResult, ApplicationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(message)
            .send()
            .await
            .map_err(|e| ApplicationError::ExternalService(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<UpstreamErrorBody>(&body)
                .ok()
                .and_then(UpstreamErrorBody::into_message)
                .unwrap_or_else(|| format!("Processing service returned {status}"));
            warn!(status = status.as_u16(), "Processing service rejected message");
            return Err(ApplicationError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let result: ProcessingResult = response
            .json()
            .await
            .map_err(|e| ApplicationError::ExternalService(format!("Failed to parse response: {e}")))?;

        debug!(success = result.success, "Processing service responded");
        Ok(result)
    }
}
