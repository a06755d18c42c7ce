//! User domain entities.

pub mod model;

pub use model::{Credentials, NewUser, User};
