pub mod owner_repository;
pub mod property_image_repository;
pub mod property_repository;
pub mod property_trace_repository;
pub mod user_repository;

pub use owner_repository::OwnerRepository;
pub use property_image_repository::PropertyImageRepository;
pub use property_repository::PropertyRepository;
pub use property_trace_repository::PropertyTraceRepository;
pub use user_repository::UserRepository;
