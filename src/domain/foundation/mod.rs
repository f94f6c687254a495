//! Foundation module - shared value objects and traits.
//!
//! These building blocks are used across the domain layer and carry
//! no triage-specific logic of their own.

mod errors;
mod state_machine;
mod timestamp;

pub use errors::ValidationError;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
