//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::SqlitePool;

use cinedex_auth::CredentialService;
use cinedex_core::config::AppConfig;
use cinedex_realtime::NotificationHub;
use cinedex_service::{CharacterService, MovieService, UserService};
use cinedex_worker::GenerationScheduler;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db_pool: SqlitePool,
    /// Open WebSocket connections
    pub hub: Arc<NotificationHub>,

    // ── Auth ─────────────────────────────────────────────────
    /// Login, registration and token checks
    pub credentials: Arc<CredentialService>,

    // ── Services ─────────────────────────────────────────────
    /// Movie catalog service
    pub movie_service: Arc<MovieService>,
    /// Character service
    pub character_service: Arc<CharacterService>,
    /// User administration service
    pub user_service: Arc<UserService>,
    /// Background movie generation
    pub generator: Arc<GenerationScheduler>,
}
