//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Username whose tokens pass the admin check.
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_minutes: default_token_ttl(),
            admin_username: default_admin_username(),
        }
    }
}

fn default_jwt_secret() -> String {
    "09d25e094faa6ca2556c818166b7a9563b93f7099f6f0f4caa6cf63b88e8d3e7".to_string()
}

fn default_token_ttl() -> u64 {
    30
}

fn default_admin_username() -> String {
    "admin".to_string()
}
