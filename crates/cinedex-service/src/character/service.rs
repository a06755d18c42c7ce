//! Character CRUD, bulk operations and generation.

use std::sync::Arc;

use tracing::info;

use cinedex_core::error::AppError;
use cinedex_core::result::AppResult;
use cinedex_core::traits::Repository;
use cinedex_core::types::{DeleteRangeReport, SkipLimit};
use cinedex_database::repositories::{CharacterRepository, MovieRepository, UserRepository};
use cinedex_entity::character::{Character, NewCharacter};

use super::generator;
use crate::movie::service::RECOUNT_WINDOW;
use crate::range;
use crate::validation::validate_input;

/// Manages characters.
#[derive(Debug, Clone)]
pub struct CharacterService {
    /// Character repository.
    characters: Arc<CharacterRepository>,
    /// Movie repository, read for generation targets.
    movies: Arc<MovieRepository>,
    /// User repository, read to resolve editor usernames.
    users: Arc<UserRepository>,
}

impl CharacterService {
    /// Creates a new character service.
    pub fn new(
        characters: Arc<CharacterRepository>,
        movies: Arc<MovieRepository>,
        users: Arc<UserRepository>,
    ) -> Self {
        Self {
            characters,
            movies,
            users,
        }
    }

    /// Lists characters in id order.
    pub async fn list(&self, page: &SkipLimit) -> AppResult<Vec<Character>> {
        self.characters.find_all(page).await
    }

    /// Gets a character by id.
    pub async fn get(&self, id: i64) -> AppResult<Character> {
        self.characters
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Character not found"))
    }

    /// Number of stored characters.
    pub async fn count(&self) -> AppResult<u64> {
        self.characters.count().await
    }

    /// Creates a character. Names need not be unique.
    pub async fn create(&self, input: &NewCharacter) -> AppResult<Character> {
        validate_input(input)?;
        let character = self.characters.create(input).await?;
        info!(character_id = character.id, movie = %character.movie_name, "Character created");
        Ok(character)
    }

    /// Inserts every character and returns them with their ids.
    pub async fn create_bulk(&self, inputs: &[NewCharacter]) -> AppResult<Vec<Character>> {
        for input in inputs {
            validate_input(input)?;
        }
        let created = self.characters.create_many(inputs).await?;
        info!(count = created.len(), "Bulk character insert finished");
        Ok(created)
    }

    /// Overwrites the editable fields of a character.
    pub async fn update(&self, id: i64, input: &NewCharacter) -> AppResult<Character> {
        validate_input(input)?;
        self.characters
            .update(id, input)
            .await?
            .ok_or_else(|| AppError::not_found("Character not found"))
    }

    /// Deletes a character by id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.characters.delete(id).await? {
            return Err(AppError::not_found("Character not found"));
        }
        info!(character_id = id, "Character deleted");
        Ok(())
    }

    /// Deletes every character id in `[start, end)`.
    pub async fn delete_range(&self, start: i64, end: i64) -> AppResult<DeleteRangeReport> {
        range::delete_range(self.characters.as_ref(), start, end).await
    }

    /// Lists characters owned by the user with the given username.
    pub async fn list_by_editor_username(&self, username: &str) -> AppResult<Vec<Character>> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        self.characters.find_by_editor(user.id).await
    }

    /// Creates `count` synthetic characters attached to random movies.
    pub async fn generate(&self, count: usize) -> AppResult<Vec<Character>> {
        let movie_names = self.movies.names(Some(RECOUNT_WINDOW as i64)).await?;
        if movie_names.is_empty() {
            return Err(AppError::validation(
                "Cannot generate characters without any movies",
            ));
        }

        let inputs: Vec<NewCharacter> = (0..count)
            .filter_map(|_| generator::synthetic_character(&movie_names))
            .collect();
        let created = self.characters.create_many(&inputs).await?;
        info!(count = created.len(), "Generated characters");
        Ok(created)
    }
}
