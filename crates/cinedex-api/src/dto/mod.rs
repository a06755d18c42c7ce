//! Response bodies that are not entities.

pub mod response;

pub use response::{CountResponse, DeletedMoviesResponse, HealthResponse, MessageResponse};
