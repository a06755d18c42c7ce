//! Movie entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A stored movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Generated identifier.
    pub id: i64,
    /// Title. Unique at insert time.
    pub name: String,
    /// Release year.
    pub year: i32,
    /// Free-text running time, e.g. `"2h 15m"`.
    pub duration: String,
    /// Genre label.
    pub genre: String,
    /// Synopsis.
    pub description: String,
    /// Characters whose `movieName` equals this name, as of the last recount.
    pub nr_characters: i64,
    /// Id of the user who created the movie.
    pub editor_id: Option<i64>,
}

/// Client-submitted movie fields.
///
/// On update, `nr_characters` and `editor_id` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    /// Title.
    #[validate(length(min = 1, message = "Movie name is required"))]
    pub name: String,
    /// Release year.
    pub year: i32,
    /// Free-text running time.
    pub duration: String,
    /// Genre label.
    pub genre: String,
    /// Synopsis.
    pub description: String,
    /// Initial character count.
    #[serde(default)]
    pub nr_characters: i64,
    /// Owning editor.
    #[serde(default)]
    pub editor_id: Option<i64>,
}

impl Movie {
    /// The submitted fields of this movie, without the id.
    pub fn to_new(&self) -> NewMovie {
        NewMovie {
            name: self.name.clone(),
            year: self.year,
            duration: self.duration.clone(),
            genre: self.genre.clone(),
            description: self.description.clone(),
            nr_characters: self.nr_characters,
            editor_id: self.editor_id,
        }
    }
}
