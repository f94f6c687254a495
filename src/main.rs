//! Companion Triage API server.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use companion_triage::adapters::ai::{OfflineGenerator, OpenAiGenerator, OpenAiGeneratorConfig};
use companion_triage::adapters::http::{triage_router, TriageAppState};
use companion_triage::adapters::sentiment::LexicalScorer;
use companion_triage::application::TriageService;
use companion_triage::config::AppConfig;
use companion_triage::ports::ReplyGenerator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let generator: Arc<dyn ReplyGenerator> = match config.generator.api_key.as_deref() {
        Some(key) if config.generator.is_configured() => {
            info!(model = %config.generator.model, "using chat-completions generator");
            let generator_config = OpenAiGeneratorConfig::new(key)
                .with_model(&config.generator.model)
                .with_base_url(&config.generator.base_url)
                .with_timeout(config.generator.timeout());
            Arc::new(OpenAiGenerator::new(generator_config)?)
        }
        _ => {
            warn!("no API key configured; replies will use built-in templates");
            Arc::new(OfflineGenerator::new())
        }
    };

    let service = Arc::new(TriageService::new(
        generator,
        Arc::new(LexicalScorer::new()),
        config.triage.to_policy_config(),
    ));

    let app = triage_router(TriageAppState::new(service));
    let addr = config.server.socket_addr();

    info!(%addr, "companion triage listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
