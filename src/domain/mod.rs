//! Domain layer - core types and the turn-processing state machine.

pub mod foundation;
pub mod triage;
