//! Application layer - Use cases and orchestration
//!
//! Contains the webhook ingestion pipeline, health aggregation, the
//! structured logger, input validation, and the ports through which the
//! infrastructure layer plugs in collaborators.

pub mod error;
pub mod logger;
pub mod ports;
pub mod services;
pub mod validation;

pub use error::{ApplicationError, normalize_failure};
pub use logger::{LogWriter, Logger, MemoryLogWriter, TracingLogWriter};
pub use ports::*;
pub use services::*;
pub use validation::{WebhookPayload, validate};
