//! docintake HTTP presentation layer
//!
//! Serves the SMS webhook (TwiML replies), the health report, and the
//! JSON envelope routes.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;
pub mod twiml;

pub use error::ApiError;
pub use middleware::{RequestId, RequestIdLayer};
pub use routes::{create_app, create_router};
pub use server::{ShutdownOutcome, serve};
pub use state::AppState;
pub use twiml::{TwimlResponse, render_message};
