//! Structured logger
//!
//! `Logger` is constructed once at startup and handed to services by
//! value (it is cheap to clone). It holds no request data: only the
//! development flag, the primary writer, and an optional external sink.

use std::fmt;
use std::sync::Arc;

use domain::{LogEntry, LogLevel};
use parking_lot::Mutex;

use crate::ports::LogSinkPort;

/// Primary output channel for rendered log lines
pub trait LogWriter: Send + Sync {
    fn write(&self, level: LogLevel, line: &str);
}

/// Writes rendered lines as `tracing` events at the matching level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogWriter;

impl LogWriter for TracingLogWriter {
    fn write(&self, level: LogLevel, line: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "docintake", "{line}"),
            LogLevel::Info => tracing::info!(target: "docintake", "{line}"),
            LogLevel::Warn => tracing::warn!(target: "docintake", "{line}"),
            LogLevel::Error => tracing::error!(target: "docintake", "{line}"),
        }
    }
}

/// Keeps rendered lines in memory
#[derive(Debug, Default)]
pub struct MemoryLogWriter {
    lines: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(LogLevel, String)> {
        self.lines.lock().clone()
    }

    pub fn lines_at(&self, level: LogLevel) -> Vec<String> {
        self.lines
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, line)| line.clone())
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|(_, line)| line.contains(needle))
    }
}

impl LogWriter for MemoryLogWriter {
    fn write(&self, level: LogLevel, line: &str) {
        self.lines.lock().push((level, line.to_string()));
    }
}

#[derive(Clone)]
pub struct Logger {
    development: bool,
    writer: Arc<dyn LogWriter>,
    sink: Option<Arc<dyn LogSinkPort>>,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("development", &self.development)
            .field("writer", &"<LogWriter>")
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl Logger {
    pub fn new(development: bool, writer: Arc<dyn LogWriter>) -> Self {
        Self {
            development,
            writer,
            sink: None,
        }
    }

    /// Logger writing through `tracing`
    pub fn tracing(development: bool) -> Self {
        Self::new(development, Arc::new(TracingLogWriter))
    }

    /// Forward error entries to `sink` when not in development mode
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn LogSinkPort>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub const fn is_development(&self) -> bool {
        self.development
    }

    /// Emit one entry
    ///
    /// Debug entries are dropped outside development mode.
    pub fn log(&self, entry: LogEntry) {
        if entry.level == LogLevel::Debug && !self.development {
            return;
        }

        self.writer.write(entry.level, &entry.render());

        if entry.level == LogLevel::Error && !self.development {
            if let Some(sink) = &self.sink {
                self.forward(Arc::clone(sink), entry);
            }
        }
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogEntry::new(LogLevel::Debug, message));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(LogEntry::new(LogLevel::Info, message));
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogEntry::new(LogLevel::Warn, message));
    }

    pub fn error(&self, message: impl Into<String>, error: &dyn fmt::Display) {
        self.log(LogEntry::new(LogLevel::Error, message).with_error(error));
    }

    fn forward(&self, sink: Arc<dyn LogSinkPort>, entry: LogEntry) {
        let writer = Arc::clone(&self.writer);
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            let skipped = LogEntry::new(LogLevel::Warn, "No async runtime; log sink skipped");
            writer.write(LogLevel::Warn, &skipped.render());
            return;
        };

        handle.spawn(async move {
            if let Err(e) = sink.submit(&entry).await {
                let failure =
                    LogEntry::new(LogLevel::Error, "Failed to send log entry to sink").with_error(&e);
                writer.write(LogLevel::Error, &failure.render());
            }
        });
    }
}
