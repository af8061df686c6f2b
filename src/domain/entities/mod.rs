pub mod owner;
pub mod property;
pub mod property_image;
pub mod property_trace;
pub mod user;

pub use owner::Owner;
pub use property::Property;
pub use property_image::PropertyImage;
pub use property_trace::PropertyTrace;
pub use user::User;
