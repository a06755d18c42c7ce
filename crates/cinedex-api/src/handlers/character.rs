//! Character handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::warn;

use cinedex_core::error::AppError;
use cinedex_core::types::{DeleteRangeReport, SkipLimit};
use cinedex_entity::character::{Character, NewCharacter};

use crate::dto::{CountResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /characters
pub async fn list_characters(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(page): Query<SkipLimit>,
) -> Result<Json<Vec<Character>>, AppError> {
    Ok(Json(state.character_service.list(&page).await?))
}

/// GET /characters/count
pub async fn count_characters(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, AppError> {
    let count = state.character_service.count().await?;
    Ok(Json(CountResponse { count }))
}

/// GET /characters/{id}
pub async fn get_character(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Character>, AppError> {
    Ok(Json(state.character_service.get(id).await?))
}

/// POST /characters
///
/// Movie character counts are recomputed afterwards as a separate step.
pub async fn create_character(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<NewCharacter>,
) -> Result<Json<Character>, AppError> {
    let character = state.character_service.create(&input).await?;
    if let Err(e) = state.movie_service.recompute_character_counts().await {
        warn!(error = %e, "Character counts not refreshed after insert");
    }
    state.hub.notify_data_changed();
    Ok(Json(character))
}

/// PUT /characters/{id}
pub async fn update_character(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    Json(input): Json<NewCharacter>,
) -> Result<Json<Character>, AppError> {
    let character = state.character_service.update(id, &input).await?;
    state.hub.notify_data_changed();
    Ok(Json(character))
}

/// DELETE /characters/{id}
pub async fn delete_character(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.character_service.delete(id).await?;
    state.hub.notify_data_changed();
    Ok(Json(MessageResponse::new("Character deleted successfully")))
}

/// POST /characters/bulk
pub async fn create_characters_bulk(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<NewCharacter>>,
) -> Result<Json<Vec<Character>>, AppError> {
    let created = state.character_service.create_bulk(&inputs).await?;
    state.hub.notify_data_changed();
    Ok(Json(created))
}

/// DELETE /characters/bulk/{start}/{end}
pub async fn delete_characters_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(i64, i64)>,
) -> Result<Json<DeleteRangeReport>, AppError> {
    state.config.limits.check_range(start, end)?;
    let report = state.character_service.delete_range(start, end).await?;
    state.hub.notify_data_changed();
    Ok(Json(report))
}

/// POST /characters/generate/{number}
pub async fn generate_characters(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(number): Path<usize>,
) -> Result<Json<MessageResponse>, AppError> {
    state.config.limits.check_generate_count(number)?;
    let created = state.character_service.generate(number).await?;
    state.hub.notify_data_changed();
    Ok(Json(MessageResponse::new(format!(
        "Generated {} characters",
        created.len()
    ))))
}

/// GET /characters/username/{username}
pub async fn list_characters_by_username(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
) -> Result<Json<Vec<Character>>, AppError> {
    Ok(Json(
        state
            .character_service
            .list_by_editor_username(&username)
            .await?,
    ))
}
