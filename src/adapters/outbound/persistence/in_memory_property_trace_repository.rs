use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{errors::RepositoryResult, PropertyTrace},
    ports::repositories::PropertyTraceRepository,
};

/// In-memory implementation of PropertyTraceRepository for testing and
/// development.
#[derive(Clone, Default)]
pub struct InMemoryPropertyTraceRepository {
    data: Arc<RwLock<HashMap<Uuid, PropertyTrace>>>,
}

impl InMemoryPropertyTraceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PropertyTraceRepository for InMemoryPropertyTraceRepository {
    async fn create(&self, trace: &PropertyTrace) -> RepositoryResult<()> {
        let mut data = self.data.write().await;
        data.insert(trace.id(), trace.clone());
        Ok(())
    }

    async fn get_by_property_id(
        &self,
        property_id: Uuid,
    ) -> RepositoryResult<Vec<PropertyTrace>> {
        let data = self.data.read().await;
        let mut items: Vec<PropertyTrace> = data
            .values()
            .filter(|t| t.property_id() == property_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.date_utc().cmp(&a.date_utc()));
        Ok(items)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        let mut data = self.data.write().await;
        Ok(data.remove(&id).is_some())
    }
}
