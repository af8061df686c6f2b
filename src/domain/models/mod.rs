pub mod filter;
pub mod page;
pub mod requests;

pub use filter::PropertyFilter;
pub use page::PagedResult;
pub use requests::{
    AuthToken, CreateImage, CreateOwner, CreateProperty, CreateTrace, Credentials, PriceUpdate,
    RegisterUser, UpdateOwner, UpdateProperty,
};
