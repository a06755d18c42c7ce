//! Character repository implementation.

use async_trait::async_trait;
use sqlx::SqlitePool;

use cinedex_core::error::{AppError, ErrorKind};
use cinedex_core::result::AppResult;
use cinedex_core::traits::Repository;
use cinedex_core::types::SkipLimit;
use cinedex_entity::character::{Character, NewCharacter};

const INSERT_CHARACTER: &str =
    "INSERT INTO characters (name, movie_name, description, editor_id) VALUES (?, ?, ?, ?) RETURNING *";

/// Repository for character CRUD and query operations.
#[derive(Debug, Clone)]
pub struct CharacterRepository {
    pool: SqlitePool,
}

impl CharacterRepository {
    /// Create a new character repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All characters owned by an editor, in id order.
    pub async fn find_by_editor(&self, editor_id: i64) -> AppResult<Vec<Character>> {
        sqlx::query_as::<_, Character>("SELECT * FROM characters WHERE editor_id = ? ORDER BY id")
            .bind(editor_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list characters by editor", e)
            })
    }

    /// Insert a character.
    pub async fn create(&self, input: &NewCharacter) -> AppResult<Character> {
        sqlx::query_as::<_, Character>(INSERT_CHARACTER)
            .bind(&input.name)
            .bind(&input.movie_name)
            .bind(&input.description)
            .bind(input.editor_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create character", e))
    }

    /// Insert every character in a single transaction.
    pub async fn create_many(&self, inputs: &[NewCharacter]) -> AppResult<Vec<Character>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            let character = sqlx::query_as::<_, Character>(INSERT_CHARACTER)
                .bind(&input.name)
                .bind(&input.movie_name)
                .bind(&input.description)
                .bind(input.editor_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to create character", e)
                })?;
            created.push(character);
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit characters", e)
        })?;
        Ok(created)
    }

    /// Overwrite the client-editable fields of a character.
    pub async fn update(&self, id: i64, input: &NewCharacter) -> AppResult<Option<Character>> {
        sqlx::query_as::<_, Character>(
            "UPDATE characters SET name = ?, movie_name = ?, description = ? WHERE id = ? RETURNING *",
        )
        .bind(&input.name)
        .bind(&input.movie_name)
        .bind(&input.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update character", e))
    }

    /// Number of characters whose movie name equals `movie_name`.
    pub async fn count_by_movie_name(&self, movie_name: &str) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM characters WHERE movie_name = ?")
            .bind(movie_name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count characters by movie", e)
            })
    }

    /// Number of characters owned by an editor.
    pub async fn count_by_editor(&self, editor_id: i64) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM characters WHERE editor_id = ?")
            .bind(editor_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count characters by editor", e)
            })
    }
}

#[async_trait]
impl Repository<Character, i64> for CharacterRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Character>> {
        sqlx::query_as::<_, Character>("SELECT * FROM characters WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find character by id", e)
            })
    }

    async fn find_all(&self, page: &SkipLimit) -> AppResult<Vec<Character>> {
        sqlx::query_as::<_, Character>("SELECT * FROM characters ORDER BY id LIMIT ? OFFSET ?")
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list characters", e))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM characters WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete character", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM characters")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count characters", e)
            })?;
        Ok(u64::try_from(total).unwrap_or_default())
    }
}
