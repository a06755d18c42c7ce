//! Core traits defined in `cinedex-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
