//! HTTP endpoints of the mail relay.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use uuid::Uuid;

use super::mailer::{Mailer, OutboundMail};
use crate::error::MailError;
use crate::submission::SubmissionPayload;

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to send email";

/// Application state shared across relay handlers.
#[derive(Clone)]
pub struct RelayState {
    pub mailer: Arc<dyn Mailer>,
    pub subject: String,
}

/// Relay handler errors.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("mail delivery failed: {0}")]
    Mail(#[from] MailError),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = match self {
            RelayError::Mail(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(serde_json::json!({ "error": FAILURE_MESSAGE }))).into_response()
    }
}

/// Build the relay router.
///
/// CORS is open: the join page is served from a different origin than the
/// relay.
pub fn relay_routes(state: RelayState) -> Router {
    Router::new()
        .route("/submit-form", post(submit_form))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "party-join-relay"
    }))
}

async fn submit_form(
    State(state): State<RelayState>,
    Json(payload): Json<SubmissionPayload>,
) -> Result<impl IntoResponse, RelayError> {
    let submission_id = Uuid::new_v4();
    info!(
        submission_id = %submission_id,
        schema_version = payload.schema_version,
        state = %payload.state,
        interests = payload.interests.len(),
        "Join submission received"
    );

    let mail = OutboundMail::for_submission(&state.subject, &payload);
    if let Err(e) = state.mailer.send(mail).await {
        error!(submission_id = %submission_id, error = %e, "Failed to relay join submission");
        return Err(e.into());
    }

    info!(submission_id = %submission_id, "Join submission relayed");
    Ok(Json(serde_json::json!({ "message": SUCCESS_MESSAGE })))
}
