mod config;
mod errors;
mod intake;
mod llm_client;
mod models;
mod records;
mod routes;
mod screening;
mod secrets;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::intake::store::SessionStore;
use crate::llm_client::LlmClient;
use crate::records::RecordWriter;
use crate::routes::build_router;
use crate::screening::questions::LlmQuestionGenerator;
use crate::screening::scoring::LlmAnswerScorer;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; every knob has a default
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TalentScout Intake API v{}", env!("CARGO_PKG_VERSION"));

    // Resolve the LLM credential (env override first, then Secrets Manager).
    // An empty key is not fatal: screening calls fail at the transport layer
    // and degrade to their documented defaults.
    let api_key = secrets::resolve_api_key(&config).await;

    let llm = LlmClient::new(api_key);
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let generator = Arc::new(LlmQuestionGenerator::new(llm.clone()));
    let scorer = Arc::new(LlmAnswerScorer::new(llm));

    let records = RecordWriter::new(config.output_dir.clone());
    info!("Candidate records directory: {}", config.output_dir.display());

    // Build app state
    let state = AppState {
        generator,
        scorer,
        records,
        sessions: SessionStore::default(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
