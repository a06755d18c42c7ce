//! Convenience result type alias for Cinedex.

use crate::error::AppError;

/// A specialized `Result` type for Cinedex operations.
pub type AppResult<T> = Result<T, AppError>;
