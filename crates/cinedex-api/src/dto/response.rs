//! Response DTOs.

use serde::{Deserialize, Serialize};

use cinedex_entity::movie::Movie;
use cinedex_realtime::MetricsSnapshot;

/// `{ "message": ... }` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

impl MessageResponse {
    /// Wraps a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{ "count": n }` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Number of stored entities.
    pub count: u64,
}

/// Movies removed by duplicate cleanup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedMoviesResponse {
    /// The removed rows.
    pub deleted_movies: Vec<Movie>,
}

/// Health check body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` when the process answers.
    pub status: String,
    /// `"connected"` or `"unavailable"`.
    pub database: String,
    /// Open WebSocket connections.
    pub connections: usize,
    /// Notification hub counters.
    pub metrics: MetricsSnapshot,
}
