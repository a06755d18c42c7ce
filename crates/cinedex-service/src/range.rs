//! Range deletion shared by every repository.

use serde::Serialize;
use tracing::{info, warn};

use cinedex_core::result::AppResult;
use cinedex_core::traits::Repository;
use cinedex_core::types::DeleteRangeReport;

/// Attempts to delete every id in `[start, end)`.
///
/// An empty or inverted range yields an empty report. An id the store
/// fails to delete is recorded in `failed` and the scan moves on.
pub async fn delete_range<E, R>(repo: &R, start: i64, end: i64) -> AppResult<DeleteRangeReport>
where
    E: Send + Sync + Serialize + 'static,
    R: Repository<E, i64> + ?Sized,
{
    let mut report = DeleteRangeReport::default();
    for id in start..end {
        match repo.delete(id).await {
            Ok(true) => report.deleted.push(id),
            Ok(false) => report.not_found.push(id),
            Err(e) => {
                warn!(id, error = %e, "Range delete failed for id");
                report.failed.push(id);
            }
        }
    }

    info!(
        start,
        end,
        deleted = report.deleted.len(),
        not_found = report.not_found.len(),
        failed = report.failed.len(),
        "Range delete finished"
    );
    Ok(report)
}
