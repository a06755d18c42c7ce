//! Movie repository implementation.

use async_trait::async_trait;
use sqlx::SqlitePool;

use cinedex_core::error::{AppError, ErrorKind};
use cinedex_core::result::AppResult;
use cinedex_core::traits::Repository;
use cinedex_core::types::SkipLimit;
use cinedex_entity::movie::{Movie, NewMovie};

/// Repository for movie CRUD and query operations.
#[derive(Debug, Clone)]
pub struct MovieRepository {
    pool: SqlitePool,
}

impl MovieRepository {
    /// Create a new movie repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Every movie in id order.
    pub async fn find_all_ordered(&self) -> AppResult<Vec<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to scan movies", e))
    }

    /// Movies owned by an editor.
    pub async fn find_by_editor(&self, editor_id: i64, page: &SkipLimit) -> AppResult<Vec<Movie>> {
        sqlx::query_as::<_, Movie>(
            "SELECT * FROM movies WHERE editor_id = ? ORDER BY id LIMIT ? OFFSET ?",
        )
        .bind(editor_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list movies by editor", e)
        })
    }

    /// Movie names in id order, capped at `limit`.
    pub async fn names(&self, limit: Option<i64>) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>("SELECT name FROM movies ORDER BY id LIMIT ?")
            .bind(limit.unwrap_or(-1))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list movie names", e))
    }

    /// Insert a movie unless one with the same name already exists.
    ///
    /// The existence check and the insert are one statement, so concurrent
    /// callers cannot both insert the same name. Returns `None` when the
    /// name is taken.
    pub async fn create(&self, input: &NewMovie) -> AppResult<Option<Movie>> {
        sqlx::query_as::<_, Movie>(
            "INSERT INTO movies (name, year, duration, genre, description, nr_characters, editor_id) \
             SELECT ?, ?, ?, ?, ?, ?, ? \
             WHERE NOT EXISTS (SELECT 1 FROM movies WHERE name = ?) RETURNING *",
        )
        .bind(&input.name)
        .bind(input.year)
        .bind(&input.duration)
        .bind(&input.genre)
        .bind(&input.description)
        .bind(input.nr_characters)
        .bind(input.editor_id)
        .bind(&input.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create movie", e))
    }

    /// Overwrite the client-editable fields of a movie.
    ///
    /// Returns `None` when no row has the id.
    pub async fn update(&self, id: i64, input: &NewMovie) -> AppResult<Option<Movie>> {
        sqlx::query_as::<_, Movie>(
            "UPDATE movies SET name = ?, year = ?, duration = ?, genre = ?, description = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(&input.name)
        .bind(input.year)
        .bind(&input.duration)
        .bind(&input.genre)
        .bind(&input.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update movie", e))
    }

    /// Delete the first movie with the given name. Returns whether a row went.
    pub async fn delete_by_name(&self, name: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM movies WHERE id = (SELECT id FROM movies WHERE name = ? ORDER BY id LIMIT 1)",
        )
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to delete movie by name", e)
        })?;
        Ok(result.rows_affected() > 0)
    }

    /// Persist a recomputed character count.
    pub async fn set_character_count(&self, id: i64, count: i64) -> AppResult<()> {
        sqlx::query("UPDATE movies SET nr_characters = ? WHERE id = ?")
            .bind(count)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to store character count", e)
            })?;
        Ok(())
    }

    /// Number of movies owned by an editor.
    pub async fn count_by_editor(&self, editor_id: i64) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies WHERE editor_id = ?")
            .bind(editor_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count movies by editor", e)
            })
    }
}

#[async_trait]
impl Repository<Movie, i64> for MovieRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find movie by id", e))
    }

    async fn find_all(&self, page: &SkipLimit) -> AppResult<Vec<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT * FROM movies ORDER BY id LIMIT ? OFFSET ?")
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list movies", e))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete movie", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count movies", e))?;
        Ok(u64::try_from(total).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{file_pool, memory_pool};

    fn sample(name: &str) -> NewMovie {
        NewMovie {
            name: name.to_string(),
            year: 1999,
            duration: "2h 16m".to_string(),
            genre: "Action".to_string(),
            description: "Test movie".to_string(),
            nr_characters: 4,
            editor_id: Some(1),
        }
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let repo = MovieRepository::new(memory_pool().await);
        let created = repo.create(&sample("Matrix")).await.unwrap().unwrap();

        let found = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.nr_characters, 4);
    }

    #[tokio::test]
    async fn test_update_keeps_server_fields() {
        let repo = MovieRepository::new(memory_pool().await);
        let created = repo.create(&sample("Alien")).await.unwrap().unwrap();

        let mut changes = sample("Aliens");
        changes.year = 1986;
        changes.nr_characters = 99;
        changes.editor_id = Some(42);
        let updated = repo.update(created.id, &changes).await.unwrap().unwrap();

        assert_eq!(updated.name, "Aliens");
        assert_eq!(updated.year, 1986);
        assert_eq!(updated.nr_characters, 4);
        assert_eq!(updated.editor_id, Some(1));
        assert!(repo.update(created.id + 100, &changes).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_paging_past_end_is_empty() {
        let repo = MovieRepository::new(memory_pool().await);
        for name in ["A", "B", "C"] {
            repo.create(&sample(name)).await.unwrap();
        }

        let page = repo.find_all(&SkipLimit::new(1, 1)).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "B");
        assert!(repo.find_all(&SkipLimit::new(10, 5)).await.unwrap().is_empty());
        assert_eq!(repo.names(None).await.unwrap(), vec!["A", "B", "C"]);
        assert_eq!(repo.names(Some(2)).await.unwrap(), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_create_refuses_taken_name() {
        let repo = MovieRepository::new(memory_pool().await);
        assert!(repo.create(&sample("Heat")).await.unwrap().is_some());
        assert!(repo.create(&sample("Heat")).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_insert_name_once() {
        let (pool, path) = file_pool("concurrent-create").await;
        let repo = MovieRepository::new(pool.clone());

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(&sample("Race")).await })
            })
            .collect();

        let mut inserted = 0;
        for task in tasks {
            if task.await.unwrap().unwrap().is_some() {
                inserted += 1;
            }
        }

        assert_eq!(inserted, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
        pool.close().await;
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_delete_by_name_removes_one_row() {
        let repo = MovieRepository::new(memory_pool().await);
        repo.create(&sample("Twin")).await.unwrap();
        let other = repo.create(&sample("Other")).await.unwrap().unwrap();
        repo.update(other.id, &sample("Twin")).await.unwrap();

        assert!(repo.delete_by_name("Twin").await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
        assert!(repo.delete_by_name("Twin").await.unwrap());
        assert!(!repo.delete_by_name("Twin").await.unwrap());
    }
}
