//! Reply Generator Port - interface to the external chat-completion service.
//!
//! The turn policy consumes this port to request focused replies. The
//! generator is a collaborator, not part of the core: it may fail or time
//! out, and the policy always recovers locally with a deterministic
//! template, so no error from this port ever reaches the caller.

use async_trait::async_trait;

/// Port for generative reply production.
///
/// Implementations connect to an external chat-completion service. A single
/// failed attempt must not be retried; the policy falls back immediately to
/// avoid duplicate externally visible replies.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Generates a reply for the given request.
    async fn generate(&self, request: GenerationRequest) -> Result<String, GeneratorError>;
}

/// One prior (user, assistant) exchange supplied as context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryExchange {
    pub user: String,
    pub assistant: String,
}

impl HistoryExchange {
    pub fn new(user: impl Into<String>, assistant: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            assistant: assistant.into(),
        }
    }
}

/// Request for a generated reply.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// System directive guiding tone and focus.
    pub system_directive: String,
    /// Bounded window of recent exchanges, oldest first.
    pub history: Vec<HistoryExchange>,
    /// The current user message.
    pub user_text: String,
}

impl GenerationRequest {
    /// Creates a request with an empty history window.
    pub fn new(system_directive: impl Into<String>, user_text: impl Into<String>) -> Self {
        Self {
            system_directive: system_directive.into(),
            history: Vec::new(),
            user_text: user_text.into(),
        }
    }

    /// Adds one prior exchange to the context window.
    pub fn with_exchange(
        mut self,
        user: impl Into<String>,
        assistant: impl Into<String>,
    ) -> Self {
        self.history.push(HistoryExchange::new(user, assistant));
        self
    }
}

/// Generator failure modes.
///
/// All variants are recovered locally by the turn policy; they exist so the
/// fallback can be logged with a precise reason.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Service is not configured or not reachable.
    #[error("generator unavailable: {message}")]
    Unavailable { message: String },

    /// Request exceeded the bounded timeout.
    #[error("generator timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Response could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl GeneratorError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
