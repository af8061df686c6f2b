pub mod auth_handlers;
pub mod image_handlers;
pub mod owner_handlers;
pub mod property_handlers;
pub mod trace_handlers;

pub use auth_handlers::*;
pub use image_handlers::*;
pub use owner_handlers::*;
pub use property_handlers::*;
pub use trace_handlers::*;
