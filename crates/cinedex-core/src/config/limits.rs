//! Request size limits.

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// Caps on the work a single request may ask for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Largest `end - start` accepted by a range delete.
    #[serde(default = "default_max_range_span")]
    pub max_range_span: u64,
    /// Largest number of items one generate request may create.
    #[serde(default = "default_max_generate_count")]
    pub max_generate_count: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_range_span: default_max_range_span(),
            max_generate_count: default_max_generate_count(),
        }
    }
}

impl LimitsConfig {
    /// Rejects a `[start, end)` range wider than `max_range_span`.
    ///
    /// Empty and inverted ranges pass; they delete nothing.
    pub fn check_range(&self, start: i64, end: i64) -> AppResult<()> {
        let span = end.abs_diff(start);
        if end > start && span > self.max_range_span {
            return Err(AppError::validation(format!(
                "Range spans {span} ids, the limit is {}",
                self.max_range_span
            )));
        }
        Ok(())
    }

    /// Rejects a generate request above `max_generate_count`.
    pub fn check_generate_count(&self, count: usize) -> AppResult<()> {
        if count > self.max_generate_count {
            return Err(AppError::validation(format!(
                "Cannot generate {count} items, the limit is {}",
                self.max_generate_count
            )));
        }
        Ok(())
    }
}

fn default_max_range_span() -> u64 {
    10_000
}

fn default_max_generate_count() -> usize {
    1_000
}
