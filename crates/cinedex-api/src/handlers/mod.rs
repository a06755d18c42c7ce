//! Request handlers grouped by domain.

pub mod auth;
pub mod character;
pub mod health;
pub mod movie;
pub mod user;
pub mod ws;
