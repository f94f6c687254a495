//! HTTP DTOs for the triage endpoint.
//!
//! These types decouple the HTTP API from domain types. The reply wire
//! shape is the domain [`ReplyRecord`](crate::domain::triage::ReplyRecord)
//! itself, which is already frontend-consumable.

use serde::{Deserialize, Serialize};

/// Inbound user message.
#[derive(Debug, Clone, Deserialize)]
pub struct UserMessage {
    /// Raw user text for this turn.
    pub text: String,

    /// Conversation identifier. Optional: callers that manage a single
    /// conversation may omit it and share the default session.
    #[serde(default = "default_session_id")]
    pub session_id: String,
}

fn default_session_id() -> String {
    "default".to_string()
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            message: "Companion Triage API is running.",
        }
    }
}
