//! HTTP log sink adapter
//!
//! Ships error entries to an external collector as JSON.

use std::time::Duration;

use application::error::ApplicationError;
use application::ports::LogSinkPort;
use async_trait::async_trait;
use domain::LogEntry;
use reqwest::Client;

use crate::config::LogSinkConfig;
use crate::http::HttpClientConfig;

/// Collector timeout; the sink runs detached from requests
const SINK_TIMEOUT: Duration = Duration::from_secs(5);

/// Log sink that POSTs each entry to a collector endpoint
#[derive(Debug, Clone)]
pub struct HttpLogSink {
    client: Client,
    endpoint: String,
}

impl HttpLogSink {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ApplicationError> {
        let client = HttpClientConfig::default()
            .with_timeout(SINK_TIMEOUT)
            .build()
            .map_err(|e| ApplicationError::Configuration(format!("HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Create a sink from configuration, if an endpoint is set
    pub fn from_config(config: &LogSinkConfig) -> Result<Option<Self>, ApplicationError> {
        config.endpoint().map(Self::new).transpose()
    }
}

#[async_trait]
impl LogSinkPort for HttpLogSink {
    async fn submit(&self, entry: &LogEntry) -> Result<(), ApplicationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(entry)
            .send()
            .await
            .map_err(|e| ApplicationError::ExternalService(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApplicationError::ExternalService(format!(
                "Log sink returned {}",
                response.status()
            )))
        }
    }
}
