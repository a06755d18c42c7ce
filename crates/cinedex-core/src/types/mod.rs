//! Core type definitions used across the Cinedex workspace.

pub mod pagination;

pub use pagination::{DeleteRangeReport, SkipLimit};
