//! Movie domain entities.

pub mod bulk;
pub mod model;

pub use bulk::BulkInsertReport;
pub use model::{Movie, NewMovie};
