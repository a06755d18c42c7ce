//! User listing, lookup, deletion and ownership aggregates.

use std::sync::Arc;

use tracing::info;

use cinedex_core::error::AppError;
use cinedex_core::result::AppResult;
use cinedex_core::traits::Repository;
use cinedex_database::repositories::{CharacterRepository, MovieRepository, UserRepository};
use cinedex_entity::user::User;

/// Manages user records.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    users: Arc<UserRepository>,
    /// Movie repository, read for ownership counts.
    movies: Arc<MovieRepository>,
    /// Character repository, read for ownership counts.
    characters: Arc<CharacterRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<UserRepository>,
        movies: Arc<MovieRepository>,
        characters: Arc<CharacterRepository>,
    ) -> Self {
        Self {
            users,
            movies,
            characters,
        }
    }

    /// Gets a user by id.
    pub async fn get(&self, id: i64) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Deletes a user by id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.users.delete(id).await? {
            return Err(AppError::not_found("User not found"));
        }
        info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Recounts owned movies and characters for every user.
    pub async fn recompute_aggregates(&self) -> AppResult<()> {
        let users = self.users.find_all_ordered().await?;
        for user in &users {
            let nr_movies = self.movies.count_by_editor(user.id).await?;
            let nr_characters = self.characters.count_by_editor(user.id).await?;
            self.users
                .set_aggregates(user.id, nr_movies, nr_characters)
                .await?;
        }
        info!(users = users.len(), "User aggregates recomputed");
        Ok(())
    }

    /// Recomputes aggregates, then lists every user except `admin_username`.
    pub async fn list_non_admin(&self, admin_username: &str) -> AppResult<Vec<User>> {
        self.recompute_aggregates().await?;
        self.users.find_all_except(admin_username).await
    }
}
