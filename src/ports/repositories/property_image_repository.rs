use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::RepositoryResult, PropertyImage};

/// Persistence contract for property images.
#[async_trait]
pub trait PropertyImageRepository: Send + Sync + 'static {
    async fn create(&self, image: &PropertyImage) -> RepositoryResult<()>;

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<PropertyImage>>;

    /// All images for a property, newest first.
    async fn get_by_property_id(&self, property_id: Uuid)
        -> RepositoryResult<Vec<PropertyImage>>;

    /// Flips the enabled flag in place; `false` when no document matched.
    async fn set_enabled(&self, id: Uuid, enabled: bool) -> RepositoryResult<bool>;

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool>;
}
