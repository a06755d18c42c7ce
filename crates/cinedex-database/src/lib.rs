//! # cinedex-database
//!
//! SQLite connection management and concrete repository implementations
//! for movies, characters and users.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
