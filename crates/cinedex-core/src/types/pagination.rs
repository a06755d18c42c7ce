//! Offset/limit pagination for list endpoints.

use serde::{Deserialize, Serialize};

/// Default number of entities per listing.
pub const DEFAULT_LIMIT: u64 = 50;

/// Offset/limit window over a table in persistence order.
///
/// Both values are non-negative. A `skip` past the end of the table yields
/// an empty page, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipLimit {
    /// Number of entities to skip.
    #[serde(default)]
    pub skip: u64,
    /// Maximum number of entities to return.
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl SkipLimit {
    /// Create a new window.
    pub fn new(skip: u64, limit: u64) -> Self {
        Self { skip, limit }
    }

    /// SQL `OFFSET` bind value.
    pub fn offset(&self) -> i64 {
        i64::try_from(self.skip).unwrap_or(i64::MAX)
    }

    /// SQL `LIMIT` bind value.
    pub fn limit(&self) -> i64 {
        i64::try_from(self.limit).unwrap_or(i64::MAX)
    }
}

impl Default for SkipLimit {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

/// Outcome of deleting every id in a half-open range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRangeReport {
    /// Ids that existed and were deleted.
    pub deleted: Vec<i64>,
    /// Ids that did not exist.
    pub not_found: Vec<i64>,
    /// Ids the store failed to delete.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<i64>,
}
