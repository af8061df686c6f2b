use thiserror::Error;

/// Validation errors raised by value-object and entity constructors.
///
/// These are always synchronous and always surface at construction or
/// mutation time; a successfully built value can no longer produce one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    // Price
    #[error("amount cannot be negative: {0}")]
    NegativeAmount(f64),
    #[error("invalid currency code: '{0}' (expected 3-4 letters)")]
    InvalidCurrency(String),
    #[error("price delta must be non-negative: {0}")]
    NegativeDelta(f64),
    #[error("price cannot decrease below zero: {amount} - {delta}")]
    PriceUnderflow { amount: f64, delta: f64 },

    // Text fields
    #[error("{field} is required")]
    RequiredField { field: &'static str },
    #[error("{field} exceeds maximum length of {max}: {actual}")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    // Property
    #[error("year out of range [{min}, {max}]: {year}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    #[error("area must be positive: {0}")]
    NonPositiveArea(f64),
    #[error("owner id is required")]
    MissingOwnerId,
    #[error("unknown owner: {0}")]
    UnknownOwner(uuid::Uuid),

    // PropertyImage / PropertyTrace
    #[error("property id is required")]
    MissingPropertyId,
    #[error("url must be an absolute http/https url: '{0}'")]
    InvalidUrl(String),
    #[error("date cannot be more than one day in the future")]
    DateTooFarInFuture,

    // User
    #[error("email is not valid: '{0}'")]
    InvalidEmail(String),
}

/// Result type for construction and mutation paths
pub type ValidationResult<T> = Result<T, ValidationError>;
