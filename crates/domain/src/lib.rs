//! Domain layer for docintake
//!
//! Contains the error taxonomy, response envelopes, and the request-scoped
//! value objects passed between the webhook pipeline and its collaborators.
//! This layer performs no I/O.

pub mod entities;
pub mod envelope;
pub mod errors;

pub use entities::*;
pub use envelope::{ErrorBody, ErrorEnvelope, SuccessEnvelope};
pub use errors::{AppError, ErrorKind};
