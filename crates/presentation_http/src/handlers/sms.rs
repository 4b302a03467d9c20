//! SMS webhook handler
//!
//! Every answer, including malformed deliveries, is a TwiML document so the
//! provider always receives something it can relay to the sender.

use std::collections::HashMap;

use application::WebhookReply;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
};
use domain::AppError;
use tracing::{info, instrument, warn};

use crate::{state::AppState, twiml::TwimlResponse};

/// Handle an inbound SMS delivery (POST, form-encoded)
#[instrument(skip(state, form))]
pub async fn handle_sms_webhook(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> TwimlResponse {
    let fields = match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected unreadable SMS webhook body");
            let err = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::new(rejection.body_text(), 413, "PAYLOAD_TOO_LARGE")
            } else {
                AppError::validation(format!("Invalid webhook payload: {}", rejection.body_text()))
            };
            return WebhookReply::failure(&err).into();
        },
    };

    let reply = state.webhook_service.handle(&fields).await;
    info!(status = reply.status_code, "SMS webhook handled");
    reply.into()
}
