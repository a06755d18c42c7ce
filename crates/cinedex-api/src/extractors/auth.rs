//! Bearer-token extractors.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use cinedex_auth::Claims;
use cinedex_core::error::AppError;

use crate::state::AppState;

/// A request carrying a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

/// A request carrying a valid bearer token for the admin subject.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        Ok(AuthUser(state.credentials.authorize(token)?))
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        Ok(AdminUser(state.credentials.authorize_admin(token)?))
    }
}

fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Not authenticated"))?;

    auth_header
        .strip_prefix("Bearer ")
        .or_else(|| auth_header.strip_prefix("bearer "))
        .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))
}
