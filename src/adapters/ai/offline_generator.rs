//! Offline generator - used when no AI provider is configured.
//!
//! Always reports itself unavailable, which routes every focused turn
//! through the built-in template replies. Lets the service run without
//! an API key for local development and demos.

use async_trait::async_trait;

use crate::ports::{GenerationRequest, GeneratorError, ReplyGenerator};

#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGenerator;

impl OfflineGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReplyGenerator for OfflineGenerator {
    async fn generate(&self, _request: GenerationRequest) -> Result<String, GeneratorError> {
        Err(GeneratorError::unavailable("no AI provider configured"))
    }
}
