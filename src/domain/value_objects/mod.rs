pub mod address;
pub mod price;

pub use address::Address;
pub use price::Price;
