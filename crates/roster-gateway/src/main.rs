//! Roster Gateway - employee directory HTTP service
//!
//! This is the main entry point for the gateway. It opens (or creates) the
//! employee store, builds the router, and serves the API and web UI until
//! interrupted.
//!
//! # Configuration
//!
//! See [`roster_gateway::GatewayConfig`] for the environment variables read
//! at startup. Log filtering follows `RUST_LOG`.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_directory::DirectoryService;
use roster_gateway::{create_router, GatewayConfig, GatewayState};
use roster_store::RocksStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,roster=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Roster Gateway");

    let config = GatewayConfig::from_env();

    tracing::info!(
        listen_addr = %config.listen_addr,
        data_dir = %config.data_dir.display(),
        static_dir = %config.static_dir.display(),
        cors_origins = ?config.cors_origins,
        "Gateway configuration loaded"
    );

    if !config.static_dir.is_dir() {
        tracing::warn!(
            static_dir = %config.static_dir.display(),
            "Static directory not found - web UI will return 404"
        );
    }

    // Open the store; the employee table is created on first run
    tracing::info!(path = %config.data_dir.display(), "Opening RocksDB store");
    std::fs::create_dir_all(&config.data_dir)?;
    let store = Arc::new(RocksStore::open(&config.data_dir)?);

    let directory = Arc::new(DirectoryService::new(store));

    let listen_addr = config.listen_addr.clone();
    let app = create_router(GatewayState::new(directory, config));
    tracing::info!("Router configured with all API endpoints");

    // Start HTTP server
    tracing::info!(listen_addr = %listen_addr, "Starting HTTP server");
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway stopped");

    Ok(())
}

/// Resolve when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
