pub mod entities;
pub mod errors;
pub mod models;
pub mod value_objects;

pub(crate) mod validate;

// Re-export commonly used types
pub use entities::{Owner, Property, PropertyImage, PropertyTrace, User};
pub use errors::{
    AuthError, RepositoryError, RepositoryResult, ServiceError, ServiceResult, ValidationError,
    ValidationResult,
};
pub use models::{PagedResult, PropertyFilter};
pub use value_objects::{Address, Price};
