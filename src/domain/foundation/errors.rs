//! Error types shared across the domain layer.

use thiserror::Error;

/// Errors that occur during value object construction or state transitions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("stage", "unknown stage token");
        assert_eq!(
            format!("{}", err),
            "Field 'stage' has invalid format: unknown stage token"
        );
    }
}
