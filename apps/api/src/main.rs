mod catalog;
mod config;
mod embedding;
mod errors;
mod feedback;
mod models;
mod ranking;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::{InMemoryCatalog, JobCatalogSource};
use crate::config::Config;
use crate::embedding::{EmbeddingProvider, HashingEmbeddingProvider, HttpEmbeddingProvider};
use crate::routes::build_router;
use crate::scoring::{MatchMode, Scorer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume scorer v{}", env!("CARGO_PKG_VERSION"));

    // Job catalog (file if configured, built-in roles otherwise)
    let catalog = match &config.job_catalog_path {
        Some(path) => InMemoryCatalog::from_path(path)?,
        None => InMemoryCatalog::builtin(),
    };
    info!("Job catalog ready: {} roles", catalog.roles().len());

    // Scorer (embedding provider is loaded once and shared read-only)
    let scorer = Arc::new(build_scorer(&config));
    info!("Scorer initialized (mode: {})", scorer.mode());

    let state = AppState {
        config: config.clone(),
        scorer,
        catalog: Arc::new(catalog),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Wires the skill matcher selected by `SCORING_MODE`.
fn build_scorer(config: &Config) -> Scorer {
    match config.scoring_mode {
        MatchMode::Lexical => Scorer::lexical(),
        MatchMode::Semantic => {
            let provider: Arc<dyn EmbeddingProvider> =
                match HttpEmbeddingProvider::from_config(&config.embedding) {
                    Some(http) => Arc::new(http),
                    None => Arc::new(HashingEmbeddingProvider::default()),
                };
            info!("Embedding provider: {}", provider.name());
            Scorer::semantic(provider)
        }
    }
}
