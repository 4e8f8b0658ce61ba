use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::config::Config;
use api::enhance::enhancer::TemplateEnhancer;
use api::routes::{build_router, cors_layer};
use api::state::AppState;
use api::storage::store::ResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Editor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the resume store. Memory starts empty on every boot; mirror
    // files from previous runs stay on disk but are never reloaded.
    let store = ResumeStore::new(&config.resume_dir);
    info!("Resume store directory: {}", config.resume_dir.display());

    // Initialize the enhancement backend (template-based, no live model)
    let enhancer = Arc::new(TemplateEnhancer);

    // Build app state
    let state = AppState { store, enhancer };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
