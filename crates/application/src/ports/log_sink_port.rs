//! External log sink port

use async_trait::async_trait;
use domain::LogEntry;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Destination for error entries outside the process (e.g. a log collector)
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LogSinkPort: Send + Sync {
    async fn submit(&self, entry: &LogEntry) -> Result<(), ApplicationError>;
}
