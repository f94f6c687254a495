//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid generator timeout")]
    InvalidTimeout,

    #[error("problem_phase_limit must be at least 1")]
    InvalidPhaseLimit,

    #[error("wrap_up_threshold must be at least 1")]
    InvalidWrapUpThreshold,

    #[error("history_window must be at least 1")]
    InvalidHistoryWindow,
}
