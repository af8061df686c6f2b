use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{errors::RepositoryResult, PropertyImage},
    ports::repositories::PropertyImageRepository,
};

/// In-memory implementation of PropertyImageRepository for testing and
/// development.
#[derive(Clone, Default)]
pub struct InMemoryPropertyImageRepository {
    data: Arc<RwLock<HashMap<Uuid, PropertyImage>>>,
}

impl InMemoryPropertyImageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PropertyImageRepository for InMemoryPropertyImageRepository {
    async fn create(&self, image: &PropertyImage) -> RepositoryResult<()> {
        let mut data = self.data.write().await;
        data.insert(image.id(), image.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<PropertyImage>> {
        let data = self.data.read().await;
        Ok(data.get(&id).cloned())
    }

    async fn get_by_property_id(
        &self,
        property_id: Uuid,
    ) -> RepositoryResult<Vec<PropertyImage>> {
        let data = self.data.read().await;
        let mut items: Vec<PropertyImage> = data
            .values()
            .filter(|img| img.property_id() == property_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at_utc().cmp(&a.created_at_utc()));
        Ok(items)
    }

    async fn set_enabled(&self, id: Uuid, enabled: bool) -> RepositoryResult<bool> {
        let mut data = self.data.write().await;
        match data.get_mut(&id) {
            Some(image) => {
                if enabled {
                    image.enable();
                } else {
                    image.disable();
                }
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        let mut data = self.data.write().await;
        Ok(data.remove(&id).is_some())
    }
}
