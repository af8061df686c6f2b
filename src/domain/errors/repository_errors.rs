use thiserror::Error;

/// Errors surfaced by the persistence adapters.
///
/// "Not found" is deliberately absent: read paths return `Option` and
/// update/delete paths return `bool` per the repository contract. Anything
/// the store itself raises passes through verbatim.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage backend error: {message}")]
    Backend { message: String },
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;
