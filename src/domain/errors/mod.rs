pub mod auth_errors;
pub mod repository_errors;
pub mod validation_errors;

pub use auth_errors::AuthError;
pub use repository_errors::{RepositoryError, RepositoryResult};
pub use validation_errors::{ValidationError, ValidationResult};

use thiserror::Error;

/// Errors surfaced by the application services.
///
/// Validation failures propagate uncaught to the HTTP adapter, which turns
/// them into 4xx responses; repository failures pass through verbatim.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
