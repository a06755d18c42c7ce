//! Movie handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::error;

use cinedex_core::error::AppError;
use cinedex_core::types::{DeleteRangeReport, SkipLimit};
use cinedex_entity::movie::{BulkInsertReport, Movie, NewMovie};

use crate::dto::{CountResponse, DeletedMoviesResponse, MessageResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /movies
pub async fn list_movies(
    State(state): State<AppState>,
    Query(page): Query<SkipLimit>,
) -> Result<Json<Vec<Movie>>, AppError> {
    Ok(Json(state.movie_service.list(&page).await?))
}

/// GET /movies/names
pub async fn list_movie_names(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<String>>, AppError> {
    Ok(Json(state.movie_service.names().await?))
}

/// GET /movies/count
pub async fn count_movies(State(state): State<AppState>) -> Result<Json<CountResponse>, AppError> {
    let count = state.movie_service.count().await?;
    Ok(Json(CountResponse { count }))
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, AppError> {
    Ok(Json(state.movie_service.get(id).await?))
}

/// POST /movies
pub async fn create_movie(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<NewMovie>,
) -> Result<Json<Movie>, AppError> {
    let movie = state.movie_service.create(&input).await?;
    state.hub.notify_data_changed();
    Ok(Json(movie))
}

/// PUT /movies/{id}
pub async fn update_movie(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
    Json(input): Json<NewMovie>,
) -> Result<Json<Movie>, AppError> {
    let movie = state.movie_service.update(id, &input).await?;
    state.hub.notify_data_changed();
    Ok(Json(movie))
}

/// DELETE /movies/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.movie_service.delete(id).await?;
    state.hub.notify_data_changed();
    Ok(Json(MessageResponse::new("Movie deleted successfully")))
}

/// DELETE /movies/by_name/{name}
pub async fn delete_movie_by_name(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(name): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.movie_service.delete_by_name(&name).await?;
    state.hub.notify_data_changed();
    Ok(Json(MessageResponse::new("Movie deleted successfully")))
}

/// POST /movies/bulk
pub async fn create_movies_bulk(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<NewMovie>>,
) -> Result<Json<BulkInsertReport>, AppError> {
    let report = state.movie_service.create_bulk(inputs).await?;
    state.hub.notify_data_changed();
    Ok(Json(report))
}

/// DELETE /movies/bulk/{start}/{end}
pub async fn delete_movies_range(
    State(state): State<AppState>,
    Path((start, end)): Path<(i64, i64)>,
) -> Result<Json<DeleteRangeReport>, AppError> {
    state.config.limits.check_range(start, end)?;
    let report = state.movie_service.delete_range(start, end).await?;
    state.hub.notify_data_changed();
    Ok(Json(report))
}

/// DELETE /movies/delete_duplicates
pub async fn delete_duplicate_movies(
    State(state): State<AppState>,
) -> Result<Json<DeletedMoviesResponse>, AppError> {
    let deleted_movies = state.movie_service.delete_duplicates().await?;
    state.hub.notify_data_changed();
    Ok(Json(DeletedMoviesResponse { deleted_movies }))
}

/// PUT /movies/update_nr_characters
///
/// Store failures are reported in the message body, never as an error status.
pub async fn update_character_counts(State(state): State<AppState>) -> Json<MessageResponse> {
    match state.movie_service.recompute_character_counts().await {
        Ok(()) => {
            state.hub.notify_data_changed();
            Json(MessageResponse::new("Aggregated column updated successfully"))
        }
        Err(e) => {
            error!(error = %e, "Character count recompute failed");
            Json(MessageResponse::new("Failed to update the aggregated column"))
        }
    }
}

/// POST /movies/generate/{number}
pub async fn start_movie_generation(
    State(state): State<AppState>,
    Path(number): Path<usize>,
) -> Result<Json<MessageResponse>, AppError> {
    state.config.limits.check_generate_count(number)?;
    state.generator.start(number);
    Ok(Json(MessageResponse::new(format!(
        "Generating {number} movies in background every {} seconds",
        state.config.generator.interval_seconds
    ))))
}

/// DELETE /movies/generate
pub async fn stop_movie_generation(State(state): State<AppState>) -> Json<MessageResponse> {
    let message = if state.generator.stop() {
        "Movie generation stopped"
    } else {
        "No movie generation is running"
    };
    Json(MessageResponse::new(message))
}

/// GET /movies/username/{username}
pub async fn list_movies_by_username(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(username): Path<String>,
    Query(page): Query<SkipLimit>,
) -> Result<Json<Vec<Movie>>, AppError> {
    Ok(Json(
        state
            .movie_service
            .list_by_editor_username(&username, &page)
            .await?,
    ))
}
