//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Generated identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub hashed_password: String,
    /// Movies whose `editorId` is this user, as of the last recount.
    pub nr_movies: i64,
    /// Characters whose `editorId` is this user, as of the last recount.
    pub nr_characters: i64,
}

/// Data required to store a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub hashed_password: String,
}

/// Login and registration payload.
///
/// The wire field is `hashedPassword` but it carries the plaintext password.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Credentials {
    /// Login name.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Plaintext password.
    #[serde(rename = "hashedPassword", alias = "password")]
    pub password: String,
}
