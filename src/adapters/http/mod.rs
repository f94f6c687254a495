//! HTTP adapter - REST delivery surface.

mod dto;
mod handlers;
mod routes;

pub use dto::{HealthResponse, UserMessage};
pub use handlers::TriageAppState;
pub use routes::triage_router;
