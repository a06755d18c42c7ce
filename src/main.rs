//! Cinedex Server: movie and character catalog with live notifications.
//!
//! Main entry point that wires all crates together and starts the server.

use std::time::Duration;

use axum::{ServiceExt, extract::Request};
use tracing_subscriber::{EnvFilter, fmt};

use cinedex_core::config::AppConfig;
use cinedex_core::error::AppError;
use cinedex_database::{DatabasePool, migration};

#[tokio::main]
async fn main() {
    let env = std::env::var("CINEDEX_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Configuration loaded (env: {})", env);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let show_target = config.logging.show_target;

    if config.logging.is_json() {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_target(show_target)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .pretty()
            .with_env_filter(filter)
            .with_target(show_target)
            .init();
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Cinedex v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let database = DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    migration::run_migrations(database.pool()).await?;
    tracing::info!("Database migrations complete");

    // ── Step 2: Services, hub and generator ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let state = cinedex_api::build_state(config, database.pool().clone())?;
    let hub = state.hub.clone();
    let generator = state.generator.clone();

    // ── Step 3: Build and start HTTP server ──────────────────────
    let app = cinedex_api::build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Cinedex server listening on {}", addr);

    // ── Step 4: Graceful shutdown ────────────────────────────────
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
            hub.close_all();
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    if tokio::time::timeout(grace, generator.shutdown())
        .await
        .is_err()
    {
        tracing::warn!("Movie generation did not stop within {:?}", grace);
    }

    database.close().await;
    tracing::info!("Cinedex server shut down gracefully");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
