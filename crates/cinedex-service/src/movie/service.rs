//! Movie CRUD, bulk operations, aggregates and generation.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use cinedex_core::error::AppError;
use cinedex_core::result::AppResult;
use cinedex_core::traits::Repository;
use cinedex_core::types::{DeleteRangeReport, SkipLimit};
use cinedex_database::repositories::{CharacterRepository, MovieRepository, UserRepository};
use cinedex_entity::movie::{BulkInsertReport, Movie, NewMovie};

use super::generator;
use crate::range;
use crate::validation::validate_input;

/// Number of movies covered by a character-count recompute.
pub const RECOUNT_WINDOW: u64 = 1000;

/// Manages the movie catalog.
#[derive(Debug, Clone)]
pub struct MovieService {
    /// Movie repository.
    movies: Arc<MovieRepository>,
    /// Character repository, read for character counts.
    characters: Arc<CharacterRepository>,
    /// User repository, read to resolve editor usernames.
    users: Arc<UserRepository>,
}

impl MovieService {
    /// Creates a new movie service.
    pub fn new(
        movies: Arc<MovieRepository>,
        characters: Arc<CharacterRepository>,
        users: Arc<UserRepository>,
    ) -> Self {
        Self {
            movies,
            characters,
            users,
        }
    }

    /// Lists movies in id order.
    pub async fn list(&self, page: &SkipLimit) -> AppResult<Vec<Movie>> {
        self.movies.find_all(page).await
    }

    /// Gets a movie by id.
    pub async fn get(&self, id: i64) -> AppResult<Movie> {
        self.movies
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie not found"))
    }

    /// All movie names in id order.
    pub async fn names(&self) -> AppResult<Vec<String>> {
        self.movies.names(None).await
    }

    /// Number of stored movies.
    pub async fn count(&self) -> AppResult<u64> {
        self.movies.count().await
    }

    /// Creates a movie. Fails with `Conflict` if the name is taken.
    pub async fn create(&self, input: &NewMovie) -> AppResult<Movie> {
        validate_input(input)?;

        let movie = self
            .movies
            .create(input)
            .await?
            .ok_or_else(|| AppError::conflict("Movie with this name already exists"))?;
        info!(movie_id = movie.id, name = %movie.name, "Movie created");
        Ok(movie)
    }

    /// Inserts movies one by one, skipping names already stored or earlier
    /// in the batch. Partial success is kept.
    ///
    /// An item the store rejects is logged and skipped; the rest of the
    /// batch still runs.
    pub async fn create_bulk(&self, inputs: Vec<NewMovie>) -> AppResult<BulkInsertReport> {
        let mut report = BulkInsertReport::default();

        for input in inputs {
            if input.name.is_empty() {
                report.skipped.push(input);
                continue;
            }
            match self.movies.create(&input).await {
                Ok(Some(movie)) => report.added.push(movie),
                Ok(None) => report.skipped.push(input),
                Err(e) => {
                    warn!(name = %input.name, error = %e, "Bulk movie insert failed for item");
                    report.skipped.push(input);
                }
            }
        }

        info!(
            added = report.added.len(),
            skipped = report.skipped.len(),
            "Bulk movie insert finished"
        );
        Ok(report)
    }

    /// Overwrites the editable fields of a movie.
    pub async fn update(&self, id: i64, input: &NewMovie) -> AppResult<Movie> {
        validate_input(input)?;

        let movie = self
            .movies
            .update(id, input)
            .await?
            .ok_or_else(|| AppError::not_found("Movie not found"))?;
        info!(movie_id = id, "Movie updated");
        Ok(movie)
    }

    /// Deletes a movie by id.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.movies.delete(id).await? {
            return Err(AppError::not_found("Movie not found"));
        }
        info!(movie_id = id, "Movie deleted");
        Ok(())
    }

    /// Deletes one movie with the given name.
    pub async fn delete_by_name(&self, name: &str) -> AppResult<()> {
        if !self.movies.delete_by_name(name).await? {
            return Err(AppError::not_found("Movie not found"));
        }
        info!(name, "Movie deleted by name");
        Ok(())
    }

    /// Deletes every movie id in `[start, end)`.
    pub async fn delete_range(&self, start: i64, end: i64) -> AppResult<DeleteRangeReport> {
        range::delete_range(self.movies.as_ref(), start, end).await
    }

    /// Deletes all but one movie of every repeated name.
    ///
    /// The scan runs in id order and keeps the last occurrence of each name.
    pub async fn delete_duplicates(&self) -> AppResult<Vec<Movie>> {
        let all = self.movies.find_all_ordered().await?;
        let mut deleted = Vec::new();

        for movie in duplicates_to_delete(all) {
            if self.movies.delete(movie.id).await? {
                deleted.push(movie);
            }
        }

        info!(deleted = deleted.len(), "Duplicate movies removed");
        Ok(deleted)
    }

    /// Recounts characters per movie for the first movies in id order.
    ///
    /// Counts match on movie-name string equality.
    pub async fn recompute_character_counts(&self) -> AppResult<()> {
        let window = SkipLimit::new(0, RECOUNT_WINDOW);
        let movies = self.movies.find_all(&window).await?;

        for movie in &movies {
            let count = self.characters.count_by_movie_name(&movie.name).await?;
            if count != movie.nr_characters {
                self.movies.set_character_count(movie.id, count).await?;
            }
        }

        info!(movies = movies.len(), "Character counts recomputed");
        Ok(())
    }

    /// Lists movies owned by an editor id.
    pub async fn list_by_editor(&self, editor_id: i64, page: &SkipLimit) -> AppResult<Vec<Movie>> {
        self.movies.find_by_editor(editor_id, page).await
    }

    /// Lists movies owned by the user with the given username.
    pub async fn list_by_editor_username(
        &self,
        username: &str,
        page: &SkipLimit,
    ) -> AppResult<Vec<Movie>> {
        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        self.list_by_editor(user.id, page).await
    }

    /// Creates `count` synthetic sequels of existing movies.
    pub async fn generate(&self, count: usize) -> AppResult<Vec<Movie>> {
        let names = self.movies.names(None).await?;
        let mut taken: HashSet<String> = names.iter().cloned().collect();
        let mut created = Vec::with_capacity(count);

        while created.len() < count {
            let name = generator::unused_sequel_name(&names, &taken);
            let input = generator::synthetic_movie(name);
            // A concurrent writer may have claimed the name since the scan.
            match self.movies.create(&input).await? {
                Some(movie) => {
                    taken.insert(movie.name.clone());
                    created.push(movie);
                }
                None => {
                    taken.insert(input.name);
                }
            }
        }

        if names.is_empty() && count > 0 {
            warn!("Catalog was empty, generated movies use a placeholder name");
        }
        info!(count = created.len(), "Generated movies");
        Ok(created)
    }
}

/// Movies that a keep-last scan in id order would delete.
fn duplicates_to_delete(movies: Vec<Movie>) -> Vec<Movie> {
    let mut remaining: Vec<String> = movies.iter().map(|m| m.name.clone()).collect();
    let mut doomed = Vec::new();

    for movie in movies {
        let occurrences = remaining.iter().filter(|n| **n == movie.name).count();
        if let Some(pos) = remaining.iter().position(|n| *n == movie.name) {
            remaining.remove(pos);
        }
        if occurrences > 1 {
            doomed.push(movie);
        }
    }
    doomed
}
