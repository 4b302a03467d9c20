//! Domain entities - request-scoped values exchanged across layers

mod inbound_message;
mod log_entry;
mod processing_result;

pub use inbound_message::InboundMessage;
pub use log_entry::{LogEntry, LogLevel};
pub use processing_result::ProcessingResult;
