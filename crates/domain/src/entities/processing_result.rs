//! Outcome reported by the processing collaborator

use serde::{Deserialize, Serialize};

/// Result of handing an inbound message to the processor
///
/// On success only `message` is meaningful; on failure only `error` is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessingResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessingResult {
    /// Successful outcome with a reply text
    pub fn replied(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    /// Successful outcome without a reply text
    pub const fn acknowledged() -> Self {
        Self {
            success: true,
            message: None,
            error: None,
        }
    }

    /// Failed outcome with a reason
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Reply text, ignoring empty strings
    pub fn reply(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }

    /// Failure reason, ignoring empty strings
    pub fn failure_reason(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.trim().is_empty())
    }
}
