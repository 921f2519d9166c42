//! # Stockroom REST API Server
//!
//! Binary entry point: load configuration, build the storage gateway and
//! receipt store, and serve the router until shutdown.

use tracing::info;
use tracing_subscriber::EnvFilter;

use stockroom_db::{Database, DbConfig};
use stockroom_rest_api::{build_app, ApiConfig, AppState, ReceiptStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Stockroom REST API server...");

    // Load configuration
    let config = ApiConfig::load()?;
    info!(
        bind_addr = %config.bind_addr,
        database = %config.database_path.display(),
        uploads = %config.upload_dir.display(),
        "Configuration loaded"
    );

    // Storage gateway: constructed once here, injected everywhere
    let db = Database::new(
        DbConfig::new(&config.database_path).max_connections(config.db_max_connections),
    )
    .await?;
    info!("Connected to SQLite");

    // Receipt store (creates the upload directory if missing)
    let receipts = ReceiptStore::new(&config.upload_dir)?;

    let state = AppState::new(db.clone(), receipts);
    let app = build_app(state, &config.api_base_path);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Starting HTTP server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
