//! TwiML reply rendering
//!
//! The SMS provider expects a fixed two-element XML document for every
//! webhook answer; only the message text and HTTP status vary.

use application::WebhookReply;
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use quick_xml::escape::escape;

/// Content type of every webhook reply
pub const TWIML_CONTENT_TYPE: &str = "text/xml";

/// Render `text` as a TwiML `<Message>` document
pub fn render_message(text: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<Response>\n  <Message>{}</Message>\n</Response>",
        escape(text)
    )
}

/// A TwiML document with its transport status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwimlResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TwimlResponse {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            body: render_message(message),
        }
    }
}

impl From<WebhookReply> for TwimlResponse {
    fn from(reply: WebhookReply) -> Self {
        let status =
            StatusCode::from_u16(reply.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, &reply.message)
    }
}

impl IntoResponse for TwimlResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, TWIML_CONTENT_TYPE)],
            self.body,
        )
            .into_response()
    }
}
