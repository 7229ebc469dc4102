//! Casual tutor API server entry point.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use casual_tutor::adapters::chains::{MockChainProvider, OpenAiChainConfig, OpenAiChainProvider};
use casual_tutor::adapters::http::{app, TutorAppState};
use casual_tutor::adapters::session::InMemorySessionStore;
use casual_tutor::config::{AiProvider, AppConfig};
use casual_tutor::domain::tutor::Subject;
use casual_tutor::ports::ChainProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let chains = build_chain_provider(&config)?;
    let store = Arc::new(InMemorySessionStore::new());
    let default_subject = Subject::new(config.tutor.default_subject.clone())?;

    let state = TutorAppState::new(
        chains,
        store,
        default_subject,
        config.tutor.subject_resolution,
    );

    let router = app(
        state,
        Duration::from_secs(config.server.request_timeout_secs),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting tutor API server on port {}", config.server.port);

    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone()));

    if config.server.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}

fn build_chain_provider(config: &AppConfig) -> Result<Arc<dyn ChainProvider>, Box<dyn Error>> {
    match config.ai.provider {
        AiProvider::OpenAI => {
            // validate() already required the key for this backend
            let api_key = config
                .ai
                .openai_api_key
                .clone()
                .ok_or("OPENAI_API_KEY is not set")?;
            let chain_config = OpenAiChainConfig::new(api_key)
                .with_model(config.ai.model.clone())
                .with_base_url(config.ai.base_url.clone())
                .with_temperature(config.ai.temperature)
                .with_max_tokens(config.ai.max_tokens)
                .with_timeout(config.ai.timeout());
            Ok(Arc::new(OpenAiChainProvider::new(chain_config)))
        }
        AiProvider::Mock => {
            tracing::warn!("using the mock chain backend; responses are canned");
            Ok(Arc::new(MockChainProvider::new()))
        }
    }
}
