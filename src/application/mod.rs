//! Application layer - use-case wiring over the domain core.

mod service;

pub use service::TriageService;
