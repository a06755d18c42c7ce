//! # cinedex-core
//!
//! Core crate for Cinedex. Contains configuration schemas, the unified
//! error system, pagination types, and the generic repository trait.
//!
//! This crate has **no** internal dependencies on other Cinedex crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
