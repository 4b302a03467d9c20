//! Structured log entries

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One log line worth of data
///
/// Produced and sunk immediately; nothing retains entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            context: None,
            error: None,
        }
    }

    #[must_use]
    pub fn with_context(mut self, context: Map<String, Value>) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn with_error(mut self, error: &dyn fmt::Display) -> Self {
        self.error = Some(error.to_string());
        self
    }

    /// Render `[timestamp] LEVEL message | {context} | Error: reason`
    ///
    /// Empty context and absent error segments are left out.
    pub fn render(&self) -> String {
        let mut line = format!(
            "[{}] {:<5} {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.level,
            self.message
        );

        if let Some(context) = self.context.as_ref().filter(|c| !c.is_empty()) {
            let json = serde_json::to_string(context).unwrap_or_else(|_| "{}".to_string());
            line.push_str(&format!(" | {json}"));
        }

        if let Some(error) = &self.error {
            line.push_str(&format!(" | Error: {error}"));
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn fixed_entry(level: LogLevel) -> LogEntry {
        let mut entry = LogEntry::new(level, "webhook received");
        entry.timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        entry
    }

    #[test]
    fn renders_bare_line() {
        assert_eq!(
            fixed_entry(LogLevel::Info).render(),
            "[2024-05-01T12:00:00.000Z] INFO  webhook received"
        );
    }

    #[test]
    fn renders_context_and_error() {
        let context = json!({"from": "+15551234567"});
        let entry = fixed_entry(LogLevel::Error)
            .with_context(context.as_object().cloned().unwrap())
            .with_error(&"processor timed out");
        assert_eq!(
            entry.render(),
            "[2024-05-01T12:00:00.000Z] ERROR webhook received | {\"from\":\"+15551234567\"} | Error: processor timed out"
        );
    }

    #[test]
    fn empty_context_is_omitted() {
        let entry = fixed_entry(LogLevel::Warn).with_context(Map::new());
        assert!(!entry.render().contains('|'));
    }

    #[test]
    fn levels_are_ordered() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"warn\"");
    }
}
