//! Repository implementations for all Cinedex entities.

pub mod character;
pub mod movie;
pub mod user;

pub use character::CharacterRepository;
pub use movie::MovieRepository;
pub use user::UserRepository;
