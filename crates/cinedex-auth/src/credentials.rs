//! Login, registration, and token authorization against the user store.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use cinedex_core::config::AuthConfig;
use cinedex_core::error::{AppError, ErrorKind};
use cinedex_core::result::AppResult;
use cinedex_database::repositories::UserRepository;
use cinedex_entity::user::{Credentials, NewUser};

use crate::jwt::{Claims, JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

/// Successful login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed bearer token.
    pub token: String,
    /// Always `"bearer"`.
    pub token_type: String,
    /// Id of the authenticated user.
    pub user_id: i64,
}

/// Authenticates users and authorizes bearer tokens.
#[derive(Debug, Clone)]
pub struct CredentialService {
    users: Arc<UserRepository>,
    hasher: PasswordHasher,
    encoder: JwtEncoder,
    decoder: JwtDecoder,
    admin_username: String,
}

impl CredentialService {
    /// Creates the service from the user store and auth configuration.
    pub fn new(users: Arc<UserRepository>, config: &AuthConfig) -> AppResult<Self> {
        Ok(Self {
            users,
            hasher: PasswordHasher::new(),
            encoder: JwtEncoder::new(config)?,
            decoder: JwtDecoder::new(config),
            admin_username: config.admin_username.clone(),
        })
    }

    /// Checks a username/password pair and issues a token for it.
    ///
    /// Unknown users and wrong passwords both yield the same
    /// `Unauthorized` error.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<LoginResponse> {
        let Some(user) = self.users.find_by_username(username).await? else {
            warn!(username, "Login attempt for unknown user");
            return Err(invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.hashed_password)? {
            warn!(username, "Login attempt with wrong password");
            return Err(invalid_credentials());
        }

        let token = self.encoder.issue_default(&user.username)?;
        info!(user_id = user.id, username, "User logged in");

        Ok(LoginResponse {
            token,
            token_type: "bearer".to_string(),
            user_id: user.id,
        })
    }

    /// Registers a new user. Returns `false` if the username is taken.
    pub async fn register(&self, credentials: &Credentials) -> AppResult<bool> {
        if self
            .users
            .find_by_username(&credentials.username)
            .await?
            .is_some()
        {
            return Ok(false);
        }

        let hashed_password = self.hasher.hash_password(&credentials.password)?;
        let created = self
            .users
            .create(&NewUser {
                username: credentials.username.clone(),
                hashed_password,
            })
            .await;

        match created {
            Ok(user) => {
                info!(user_id = user.id, username = %user.username, "User registered");
                Ok(true)
            }
            // Lost a race with a concurrent registration of the same name.
            Err(e) if e.kind == ErrorKind::Conflict => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Validates a bearer token.
    pub fn authorize(&self, token: &str) -> AppResult<Claims> {
        self.decoder.validate(token)
    }

    /// Validates a bearer token and requires the admin subject.
    pub fn authorize_admin(&self, token: &str) -> AppResult<Claims> {
        let claims = self.decoder.validate(token)?;
        if claims.sub != self.admin_username {
            warn!(subject = %claims.sub, "Non-admin token used on admin route");
            return Err(AppError::unauthorized("Admin privileges required"));
        }
        Ok(claims)
    }

    /// Issues a token for an arbitrary subject with the configured TTL.
    pub fn issue_token(&self, subject: &str) -> AppResult<String> {
        self.encoder.issue_default(subject)
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Incorrect username or password")
}
