//! Bulk insert outcome.

use serde::{Deserialize, Serialize};

use super::model::{Movie, NewMovie};

/// Partition of a bulk insert into stored and duplicate-skipped movies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkInsertReport {
    /// Movies that were stored, with their generated ids.
    #[serde(rename = "added_movies")]
    pub added: Vec<Movie>,
    /// Inputs skipped because the name was already taken.
    #[serde(rename = "not_added_movies")]
    pub skipped: Vec<NewMovie>,
}
