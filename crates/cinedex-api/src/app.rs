//! Application builder: wires repositories, services and the router.

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use cinedex_auth::CredentialService;
use cinedex_core::config::AppConfig;
use cinedex_core::result::AppResult;
use cinedex_database::repositories::{CharacterRepository, MovieRepository, UserRepository};
use cinedex_realtime::NotificationHub;
use cinedex_service::{CharacterService, MovieService, UserService};
use cinedex_worker::GenerationScheduler;

use crate::router::build_router;
use crate::state::AppState;

/// Builds every repository and service on top of a migrated pool.
///
/// Fails when the auth configuration cannot produce tokens.
pub fn build_state(config: AppConfig, db_pool: SqlitePool) -> AppResult<AppState> {
    // ── Repositories ─────────────────────────────────────────
    let movie_repo = Arc::new(MovieRepository::new(db_pool.clone()));
    let character_repo = Arc::new(CharacterRepository::new(db_pool.clone()));
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────
    let credentials = Arc::new(CredentialService::new(
        Arc::clone(&user_repo),
        &config.auth,
    )?);

    // ── Services ─────────────────────────────────────────────
    let movie_service = Arc::new(MovieService::new(
        Arc::clone(&movie_repo),
        Arc::clone(&character_repo),
        Arc::clone(&user_repo),
    ));
    let character_service = Arc::new(CharacterService::new(
        Arc::clone(&character_repo),
        Arc::clone(&movie_repo),
        Arc::clone(&user_repo),
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&movie_repo),
        Arc::clone(&character_repo),
    ));

    // ── Realtime & background generation ─────────────────────
    let hub = Arc::new(NotificationHub::new(config.realtime.clone()));
    let generator = Arc::new(GenerationScheduler::new(
        Arc::clone(&movie_service),
        Arc::clone(&hub),
        config.generator.clone(),
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        hub,
        credentials,
        movie_service,
        character_service,
        user_service,
        generator,
    })
}

/// Builds the complete application: router, middleware, and trailing-slash
/// normalization.
///
/// Trailing slashes are trimmed before routing, so `/movies/` and `/movies`
/// reach the same handler.
pub fn build_app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
