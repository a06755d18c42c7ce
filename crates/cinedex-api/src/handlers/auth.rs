//! Auth handlers: login and registration.

use axum::Json;
use axum::extract::State;

use cinedex_auth::LoginResponse;
use cinedex_core::error::AppError;
use cinedex_entity::user::Credentials;
use cinedex_service::validation::validate_input;

use crate::state::AppState;

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<Credentials>,
) -> Result<Json<LoginResponse>, AppError> {
    let login = state
        .credentials
        .authenticate(&req.username, &req.password)
        .await?;
    Ok(Json(login))
}

/// POST /auth/register
///
/// Responds `false` when the username is already taken.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<Credentials>,
) -> Result<Json<bool>, AppError> {
    validate_input(&req)?;
    let created = state.credentials.register(&req).await?;
    if created {
        state.hub.notify_data_changed();
    }
    Ok(Json(created))
}
