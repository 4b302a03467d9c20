//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod acknowledging_processor;
mod capability_probe;
mod database_probe;
mod http_log_sink;
mod http_message_processor;

pub use acknowledging_processor::AcknowledgingProcessor;
pub use capability_probe::CapabilityProbe;
pub use database_probe::DatabaseProbe;
pub use http_log_sink::HttpLogSink;
pub use http_message_processor::HttpMessageProcessor;
