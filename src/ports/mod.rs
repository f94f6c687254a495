//! Ports - interfaces to external collaborators.
//!
//! The core depends only on these traits; adapters supply implementations.

mod generator;
mod sentiment;

pub use generator::{GenerationRequest, GeneratorError, HistoryExchange, ReplyGenerator};
pub use sentiment::SentimentScorer;
