//! JWT token creation.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use cinedex_core::config::AuthConfig;
use cinedex_core::error::AppError;

use super::claims::Claims;

/// Creates HS256-signed tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// TTL applied by [`JwtEncoder::issue_default`].
    default_ttl: TimeDelta,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    ///
    /// Fails with `Configuration` when the TTL cannot be added to the
    /// current time.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let default_ttl = i64::try_from(config.token_ttl_minutes)
            .ok()
            .and_then(TimeDelta::try_minutes)
            .filter(|ttl| Utc::now().checked_add_signed(*ttl).is_some())
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "Token TTL of {} minutes is out of range",
                    config.token_ttl_minutes
                ))
            })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            default_ttl,
        })
    }

    /// Issues a token for `subject` that expires after `ttl`.
    pub fn issue(&self, subject: &str, ttl: TimeDelta) -> Result<String, AppError> {
        let now = Utc::now();
        let expires = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::internal("Token expiry is out of range"))?;
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }

    /// Issues a token with the configured TTL.
    pub fn issue_default(&self, subject: &str) -> Result<String, AppError> {
        self.issue(subject, self.default_ttl)
    }
}
