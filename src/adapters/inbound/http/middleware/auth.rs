use axum::{extract::FromRequestParts, http::header, http::request::Parts};

use crate::{
    adapters::inbound::http::{error::ApiError, router::AppState},
    ports::security::TokenClaims,
};

/// Extractor that gates a handler behind bearer auth. Rejects with 401
/// when the Authorization header is missing, malformed or carries an
/// invalid token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub TokenClaims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(ApiError::unauthorized)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(ApiError::unauthorized)?;

        let claims = state
            .tokens
            .validate(token)
            .ok_or_else(ApiError::unauthorized)?;

        Ok(AuthUser(claims))
    }
}
