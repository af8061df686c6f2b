use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::ServiceResult, models::CreateImage, PropertyImage};

/// Application-service contract for property images.
#[async_trait]
pub trait PropertyImageService: Send + Sync + 'static {
    async fn create(&self, request: CreateImage) -> ServiceResult<PropertyImage>;

    async fn get_by_property_id(&self, property_id: Uuid)
        -> ServiceResult<Vec<PropertyImage>>;

    async fn set_enabled(&self, id: Uuid, enabled: bool) -> ServiceResult<bool>;

    async fn delete(&self, id: Uuid) -> ServiceResult<bool>;
}
