//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `COMPANION_TRIAGE` prefix and nested values use double underscores as
//! separators, e.g. `COMPANION_TRIAGE__SERVER__PORT=8000`.

mod error;
mod generator;
mod server;
mod triage;

pub use error::{ConfigError, ValidationError};
pub use generator::GeneratorConfig;
pub use server::ServerConfig;
pub use triage::TriageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, log level)
    #[serde(default)]
    pub server: ServerConfig,

    /// Generator configuration (chat-completion service)
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Triage policy configuration
    #[serde(default)]
    pub triage: TriageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads environment variables
    /// with the `COMPANION_TRIAGE` prefix into typed sections.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COMPANION_TRIAGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.generator.validate()?;
        self.triage.validate()?;
        Ok(())
    }
}
