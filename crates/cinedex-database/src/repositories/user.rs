//! User repository implementation.

use async_trait::async_trait;
use sqlx::SqlitePool;

use cinedex_core::error::{AppError, ErrorKind};
use cinedex_core::result::AppResult;
use cinedex_core::traits::Repository;
use cinedex_core::types::SkipLimit;
use cinedex_entity::user::{NewUser, User};

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a user by username (exact match).
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    /// Every user in id order.
    pub async fn find_all_ordered(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to scan users", e))
    }

    /// Every user except the one with the given username.
    pub async fn find_all_except(&self, username: &str) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username <> ? ORDER BY id")
            .bind(username)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Insert a user.
    ///
    /// A taken username surfaces as [`ErrorKind::Conflict`].
    pub async fn create(&self, input: &NewUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, hashed_password) VALUES (?, ?) RETURNING *",
        )
        .bind(&input.username)
        .bind(&input.hashed_password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::with_source(
                ErrorKind::Conflict,
                format!("Username '{}' is already registered", input.username),
                e,
            ),
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Persist recomputed ownership counts.
    pub async fn set_aggregates(&self, id: i64, nr_movies: i64, nr_characters: i64) -> AppResult<()> {
        sqlx::query("UPDATE users SET nr_movies = ?, nr_characters = ? WHERE id = ?")
            .bind(nr_movies)
            .bind(nr_characters)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to store user aggregates", e)
            })?;
        Ok(())
    }
}

#[async_trait]
impl Repository<User, i64> for UserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_all(&self, page: &SkipLimit) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id LIMIT ? OFFSET ?")
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;
        Ok(u64::try_from(total).unwrap_or_default())
    }
}
