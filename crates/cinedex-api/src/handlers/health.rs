//! Status page and health check.

use axum::Json;
use axum::extract::State;
use axum::response::Html;

use cinedex_database::connection::health_check;

use crate::dto::HealthResponse;
use crate::state::AppState;

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>Cinedex</title>
    </head>
    <body>
        <h1>WebSocket server is running successfully</h1>
        <p>Connect to <code>/ws</code> to receive data-changed notifications.</p>
    </body>
</html>
"#;

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match health_check(&state.db_pool).await {
        Ok(true) => "connected",
        _ => "unavailable",
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        database: database.to_string(),
        connections: state.hub.connection_count(),
        metrics: state.hub.metrics(),
    })
}
