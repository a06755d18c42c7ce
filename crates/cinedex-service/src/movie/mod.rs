//! Movie catalog services.

pub mod generator;
pub mod service;

pub use service::MovieService;
