//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod database_health_port;
mod log_sink_port;
mod message_processor_port;
mod service_probe_port;

#[cfg(test)]
pub use database_health_port::MockDatabaseHealthPort;
pub use database_health_port::{DatabaseHealth, DatabaseHealthPort};
#[cfg(test)]
pub use log_sink_port::MockLogSinkPort;
pub use log_sink_port::LogSinkPort;
#[cfg(test)]
pub use message_processor_port::MockMessageProcessorPort;
pub use message_processor_port::MessageProcessorPort;
#[cfg(test)]
pub use service_probe_port::MockServiceProbePort;
pub use service_probe_port::{ServiceCheck, ServiceProbePort, ServiceState};
