use thiserror::Error;

use super::{RepositoryError, ValidationError};

/// Errors raised by the authentication service.
///
/// `EmailTaken` and `InvalidCredentials` are business conflicts, a distinct
/// kind from domain validation so the HTTP adapter can map them to a
/// different response class (409/401 rather than 400).
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("email is already registered")]
    EmailTaken,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
