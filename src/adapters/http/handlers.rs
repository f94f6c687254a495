//! Axum handlers for the triage endpoints.
//!
//! Pure transport: handlers deserialize, delegate to the application
//! service, and serialize. No decision logic lives here.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::debug;

use crate::application::TriageService;
use crate::domain::triage::ReplyRecord;

use super::dto::{HealthResponse, UserMessage};

/// Shared state for triage endpoints.
#[derive(Clone)]
pub struct TriageAppState {
    pub service: Arc<TriageService>,
}

impl TriageAppState {
    pub fn new(service: Arc<TriageService>) -> Self {
        Self { service }
    }
}

/// POST /message - process one user turn.
///
/// Always returns 200 with a well-formed reply record; the core has no
/// fatal error paths.
pub async fn send_message(
    State(state): State<TriageAppState>,
    Json(message): Json<UserMessage>,
) -> Json<ReplyRecord> {
    debug!(session_id = %message.session_id, "processing turn");
    let record = state
        .service
        .process_turn(&message.session_id, &message.text)
        .await;
    Json(record)
}

/// GET / - health check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::up())
}
