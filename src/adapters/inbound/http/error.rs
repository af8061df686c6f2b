use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::{
    domain::errors::{AuthError, ServiceError, ValidationError},
    ports::storage::FileStoreError,
};

use super::dto::ErrorResponse;

/// Uniform error surface for every handler. Each variant carries its HTTP
/// status; bodies are the `{error, message, timestamp}` envelope.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn not_found(what: &str) -> Self {
        ApiError::NotFound(format!("{what} not found"))
    }

    pub fn unauthorized() -> Self {
        ApiError::Unauthorized("missing or invalid bearer token".to_string())
    }

    fn parts(&self) -> (StatusCode, &'static str, &str) {
        match self {
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, "bad_request", m),
            ApiError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, "unauthorized", m),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, "not_found", m),
            ApiError::Conflict(m) => (StatusCode::CONFLICT, "conflict", m),
            ApiError::Internal(m) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", m),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = self.parts();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(%message, "request failed");
        }
        let body = ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
            timestamp: Utc::now(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(e) => ApiError::BadRequest(e.to_string()),
            ServiceError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::EmailTaken => ApiError::Conflict(err.to_string()),
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::Validation(e) => ApiError::BadRequest(e.to_string()),
            AuthError::Repository(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<FileStoreError> for ApiError {
    fn from(err: FileStoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
