pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - entities, value objects, search models
pub use domain::{
    Address,
    AuthError,
    Owner,
    PagedResult,
    Price,
    Property,
    PropertyFilter,
    PropertyImage,
    PropertyTrace,
    RepositoryError,
    ServiceError,
    User,
    ValidationError,
};

// Port traits - contracts between layers
pub use ports::{
    AuthService, FileStore, OwnerRepository, OwnerService, PasswordHasher,
    PropertyImageRepository, PropertyImageService, PropertyRepository, PropertyService,
    PropertyTraceRepository, PropertyTraceService, TokenProvider, UserRepository,
};

// Service implementations
pub use services::{
    AuthServiceImpl, OwnerServiceImpl, PropertyImageServiceImpl, PropertyServiceImpl,
    PropertyTraceServiceImpl,
};

// Application factory and configuration
pub use app::{
    create_in_memory_app, AppBuilder, AppConfig, AppError, AuthConfig, RepositoryBackend,
    UploadConfig,
};

// HTTP surface
pub use adapters::inbound::http::{create_router, AppState};

pub mod prelude {
    pub use crate::{
        create_in_memory_app, create_router, Address, AppBuilder, AppConfig, AppState, Owner,
        OwnerService, PagedResult, Price, Property, PropertyFilter, PropertyService,
        RepositoryBackend,
    };
}
