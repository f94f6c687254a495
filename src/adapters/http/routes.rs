//! Axum routes for the triage endpoints.
//!
//! Endpoints:
//! - POST /message - process one user turn, returns the reply record
//! - GET / - health check

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{health, send_message, TriageAppState};

/// Creates the triage router with CORS open for frontend callers.
pub fn triage_router(state: TriageAppState) -> Router {
    Router::new()
        .route("/message", post(send_message))
        .route("/", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockGenerator;
    use crate::adapters::sentiment::LexicalScorer;
    use crate::application::TriageService;
    use crate::domain::triage::TurnPolicyConfig;
    use std::sync::Arc;

    #[test]
    fn triage_router_builds() {
        let service = Arc::new(TriageService::new(
            Arc::new(MockGenerator::new()),
            Arc::new(LexicalScorer::new()),
            TurnPolicyConfig::default(),
        ));
        let _router = triage_router(TriageAppState::new(service));
    }
}
