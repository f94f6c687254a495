//! OpenAI-compatible reply generator.
//!
//! Implements the [`ReplyGenerator`] port against any chat-completions
//! endpoint that speaks the OpenAI wire format (including Azure-hosted
//! deployments via `base_url`). A single attempt is made per request with a
//! bounded timeout; the turn policy handles fallback, so no retries happen
//! here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::ports::{GenerationRequest, GeneratorError, ReplyGenerator};

/// Configuration for the OpenAI-compatible generator.
#[derive(Debug, Clone)]
pub struct OpenAiGeneratorConfig {
    /// API key sent as a bearer token.
    api_key: String,
    /// Model or deployment name.
    pub model: String,
    /// Base URL of the chat-completions API.
    pub base_url: String,
    /// Request timeout; the only bound on the call.
    pub timeout: Duration,
    /// Maximum tokens to generate per reply.
    pub max_tokens: u32,
}

impl OpenAiGeneratorConfig {
    /// Creates a configuration with the given API key and defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "gpt-4o".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(30),
            max_tokens: 400,
        }
    }

    /// Sets the model or deployment name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// OpenAI-compatible chat-completions client.
pub struct OpenAiGenerator {
    config: OpenAiGeneratorConfig,
    client: Client,
}

impl OpenAiGenerator {
    /// Creates a generator with the given configuration.
    pub fn new(config: OpenAiGeneratorConfig) -> Result<Self, GeneratorError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GeneratorError::unavailable(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    /// Converts a generation request to the wire format.
    fn to_wire_request(&self, request: &GenerationRequest) -> WireRequest {
        let mut messages = vec![WireMessage {
            role: "system".to_string(),
            content: request.system_directive.clone(),
        }];

        for exchange in &request.history {
            messages.push(WireMessage {
                role: "user".to_string(),
                content: exchange.user.clone(),
            });
            messages.push(WireMessage {
                role: "assistant".to_string(),
                content: exchange.assistant.clone(),
            });
        }

        messages.push(WireMessage {
            role: "user".to_string(),
            content: request.user_text.clone(),
        });

        WireRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            temperature: 0.7,
        }
    }
}

#[async_trait]
impl ReplyGenerator for OpenAiGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GeneratorError> {
        let wire = self.to_wire_request(&request);

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key())
            .json(&wire)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeneratorError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else {
                    GeneratorError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::unavailable(format!(
                "status {status}: {body}"
            )));
        }

        let parsed: WireResponse = response
            .json()
            .await
            .map_err(|e| GeneratorError::parse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| GeneratorError::parse("response contained no choices"))
    }
}

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireMessage,
}
