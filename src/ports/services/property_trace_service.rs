use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::ServiceResult, models::CreateTrace, PropertyTrace};

/// Application-service contract for property traces.
#[async_trait]
pub trait PropertyTraceService: Send + Sync + 'static {
    async fn create(&self, request: CreateTrace) -> ServiceResult<PropertyTrace>;

    async fn get_by_property_id(&self, property_id: Uuid)
        -> ServiceResult<Vec<PropertyTrace>>;

    async fn delete(&self, id: Uuid) -> ServiceResult<bool>;
}
