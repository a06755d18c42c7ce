//! # cinedex-api
//!
//! HTTP API layer for Cinedex built on Axum.
//!
//! Provides the REST endpoints for movies, characters, users and auth, the
//! WebSocket upgrade, middleware (CORS, logging), extractors, and error
//! mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use state::AppState;
