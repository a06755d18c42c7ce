//! # cinedex-service
//!
//! Business logic service layer for Cinedex. Each service orchestrates the
//! repositories it needs; dependencies are provided at construction time
//! via `Arc` references.

pub mod character;
pub mod movie;
pub mod range;
pub mod user;
pub mod validation;

pub use character::CharacterService;
pub use movie::MovieService;
pub use user::UserService;
