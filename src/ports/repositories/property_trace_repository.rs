use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::RepositoryResult, PropertyTrace};

/// Persistence contract for property traces.
#[async_trait]
pub trait PropertyTraceRepository: Send + Sync + 'static {
    async fn create(&self, trace: &PropertyTrace) -> RepositoryResult<()>;

    /// All traces for a property, most recent date first.
    async fn get_by_property_id(&self, property_id: Uuid)
        -> RepositoryResult<Vec<PropertyTrace>>;

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool>;
}
