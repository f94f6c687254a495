//! Triage module - the turn-processing core.
//!
//! Covers classification, duration extraction, session state, the
//! phase-limited turn policy, and response rendering. The only inbound
//! operation is [`TurnPolicy::process_turn`].

mod duration;
mod lexicon;
mod policy;
mod problem;
mod render;
mod risk;
mod sentiment;
mod session;
mod stage;
pub mod templates;

pub use duration::parse_duration_days;
pub use lexicon::Lexicon;
pub use policy::{TurnPolicy, TurnPolicyConfig};
pub use problem::ProblemType;
pub use render::{mood_indicator, render, ReplyRecord};
pub use risk::RiskTier;
pub use sentiment::{Sentiment, SentimentRecord};
pub use session::{ConversationTurn, SessionState};
pub use stage::{TurnStage, TurnState};
