//! Character services.

pub mod generator;
pub mod service;

pub use service::CharacterService;
