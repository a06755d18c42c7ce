//! Character domain entities.

pub mod model;

pub use model::{Character, NewCharacter};
