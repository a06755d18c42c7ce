//! Input validation helpers.

use validator::Validate;

use cinedex_core::error::AppError;
use cinedex_core::result::AppResult;

/// Run derive-based validation, mapping failures to a validation error.
pub fn validate_input<T: Validate>(input: &T) -> AppResult<()> {
    input
        .validate()
        .map_err(|e| AppError::validation(format!("Invalid input: {e}")))
}
