//! User handlers.

use axum::Json;
use axum::extract::{Path, State};

use cinedex_core::error::AppError;
use cinedex_entity::user::User;

use crate::dto::MessageResponse;
use crate::extractors::{AdminUser, AuthUser};
use crate::state::AppState;

/// GET /users/nonAdmin
pub async fn list_non_admin_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<User>>, AppError> {
    let users = state
        .user_service
        .list_non_admin(&state.config.auth.admin_username)
        .await?;
    Ok(Json(users))
}

/// GET /users/userId/{id}
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<User>, AppError> {
    Ok(Json(state.user_service.get(id).await?))
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.user_service.delete(id).await?;
    state.hub.notify_data_changed();
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
