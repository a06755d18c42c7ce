//! Route definitions for the Cinedex HTTP API.
//!
//! Routes are organized by domain and merged at the root. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(status_routes())
        .merge(movie_routes())
        .merge(character_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Status page, health check and WebSocket upgrade
fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::index))
        .route("/health", get(handlers::health::health))
        .route("/ws", get(handlers::ws::ws_handler))
}

/// Movie CRUD, bulk maintenance and background generation
fn movie_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/movies",
            get(handlers::movie::list_movies).post(handlers::movie::create_movie),
        )
        .route("/movies/names", get(handlers::movie::list_movie_names))
        .route("/movies/count", get(handlers::movie::count_movies))
        .route("/movies/bulk", post(handlers::movie::create_movies_bulk))
        .route(
            "/movies/bulk/{start}/{end}",
            delete(handlers::movie::delete_movies_range),
        )
        .route(
            "/movies/delete_duplicates",
            delete(handlers::movie::delete_duplicate_movies),
        )
        .route(
            "/movies/update_nr_characters",
            put(handlers::movie::update_character_counts),
        )
        .route(
            "/movies/generate",
            delete(handlers::movie::stop_movie_generation),
        )
        .route(
            "/movies/generate/{number}",
            post(handlers::movie::start_movie_generation),
        )
        .route(
            "/movies/by_name/{name}",
            delete(handlers::movie::delete_movie_by_name),
        )
        .route(
            "/movies/username/{username}",
            get(handlers::movie::list_movies_by_username),
        )
        .route(
            "/movies/{id}",
            get(handlers::movie::get_movie)
                .put(handlers::movie::update_movie)
                .delete(handlers::movie::delete_movie),
        )
}

/// Character CRUD and generation
fn character_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/characters",
            get(handlers::character::list_characters).post(handlers::character::create_character),
        )
        .route("/characters/count", get(handlers::character::count_characters))
        .route(
            "/characters/bulk",
            post(handlers::character::create_characters_bulk),
        )
        .route(
            "/characters/bulk/{start}/{end}",
            delete(handlers::character::delete_characters_range),
        )
        .route(
            "/characters/generate/{number}",
            post(handlers::character::generate_characters),
        )
        .route(
            "/characters/username/{username}",
            get(handlers::character::list_characters_by_username),
        )
        .route(
            "/characters/{id}",
            get(handlers::character::get_character)
                .put(handlers::character::update_character)
                .delete(handlers::character::delete_character),
        )
}

/// Auth endpoints: login, register
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
}

/// User administration
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/nonAdmin", get(handlers::user::list_non_admin_users))
        .route("/users/userId/{id}", get(handlers::user::get_user))
        .route("/users/{id}", delete(handlers::user::delete_user))
}
