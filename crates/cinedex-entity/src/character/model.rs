//! Character entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A stored character.
///
/// `movie_name` is a free-text reference; no referential integrity is
/// enforced against the movies table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Generated identifier.
    pub id: i64,
    /// Character name.
    pub name: String,
    /// Name of the movie the character appears in.
    pub movie_name: String,
    /// Description.
    pub description: String,
    /// Id of the user who created the character.
    pub editor_id: Option<i64>,
}

/// Client-submitted character fields. `editor_id` is ignored on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCharacter {
    /// Character name.
    #[validate(length(min = 1, message = "Character name is required"))]
    pub name: String,
    /// Name of the movie the character appears in.
    pub movie_name: String,
    /// Description.
    pub description: String,
    /// Owning editor.
    #[serde(default)]
    pub editor_id: Option<i64>,
}
