//! # cinedex-auth
//!
//! Credential handling for Cinedex.
//!
//! ## Modules
//!
//! - `jwt`: HS256 token creation and validation
//! - `password`: Argon2id password hashing
//! - `credentials`: login, registration and bearer/admin checks

pub mod credentials;
pub mod jwt;
pub mod password;

pub use credentials::{CredentialService, LoginResponse};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
