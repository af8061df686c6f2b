pub mod auth_service;
pub mod owner_service;
pub mod property_image_service;
pub mod property_service;
pub mod property_trace_service;

pub use auth_service::AuthService;
pub use owner_service::OwnerService;
pub use property_image_service::PropertyImageService;
pub use property_service::PropertyService;
pub use property_trace_service::PropertyTraceService;
