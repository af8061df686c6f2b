mod auth_service_impl;
mod owner_service_impl;
mod property_image_service_impl;
mod property_service_impl;
mod property_trace_service_impl;

pub use auth_service_impl::AuthServiceImpl;
pub use owner_service_impl::OwnerServiceImpl;
pub use property_image_service_impl::PropertyImageServiceImpl;
pub use property_service_impl::PropertyServiceImpl;
pub use property_trace_service_impl::PropertyTraceServiceImpl;
