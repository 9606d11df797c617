//! Podium catalog server.
//!
//! Serves the sync protocol over HTTP with an in-memory catalog. State
//! lives for the lifetime of the process; there is no persistence across
//! restarts.
//!
//! # Usage
//!
//! ```bash
//! PORT=8088 cargo run --bin podium-server
//! ```

mod config;

use config::ServerConfig;
use podium_core::Catalog;
use podium_web::{build_router, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = Arc::new(Catalog::new());
    let router = build_router(AppState::new(catalog));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "catalog server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down cleanly");
    Ok(())
}

/// Resolve when ctrl-c arrives.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install ctrl-c handler");
    }
    tracing::info!("shutdown requested");
}
