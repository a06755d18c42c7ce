//! # cinedex-entity
//!
//! Domain entity models for Cinedex. Every row struct maps one table and
//! derives `sqlx::FromRow`; the input payloads (`New*`) carry the fields a
//! client may submit and derive `validator::Validate`.
//!
//! JSON field names follow the published API (`nrCharacters`, `editorId`,
//! `movieName`, `nrMovies`).

pub mod character;
pub mod movie;
pub mod user;
