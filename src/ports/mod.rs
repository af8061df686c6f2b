pub mod repositories;
pub mod security;
pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use repositories::{
    OwnerRepository, PropertyImageRepository, PropertyRepository, PropertyTraceRepository,
    UserRepository,
};
pub use security::{PasswordHasher, TokenClaims, TokenProvider};
pub use services::{
    AuthService, OwnerService, PropertyImageService, PropertyService, PropertyTraceService,
};
pub use storage::{FileStore, FileStoreError, StoredFile};
