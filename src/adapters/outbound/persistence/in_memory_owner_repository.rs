use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{errors::RepositoryResult, models::filter::starts_with_ignore_case, Owner},
    ports::repositories::OwnerRepository,
};

/// In-memory implementation of OwnerRepository for testing and development.
#[derive(Clone, Default)]
pub struct InMemoryOwnerRepository {
    data: Arc<RwLock<HashMap<Uuid, Owner>>>,
}

impl InMemoryOwnerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    async fn create(&self, owner: &Owner) -> RepositoryResult<()> {
        let mut data = self.data.write().await;
        data.insert(owner.id(), owner.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<Owner>> {
        let data = self.data.read().await;
        Ok(data.get(&id).cloned())
    }

    async fn search(
        &self,
        name: Option<&str>,
        skip: i64,
        take: i64,
    ) -> RepositoryResult<Vec<Owner>> {
        let data = self.data.read().await;
        let mut items: Vec<Owner> = data
            .values()
            .filter(|o| {
                name.map(str::trim).filter(|n| !n.is_empty()).map_or(true, |n| {
                    starts_with_ignore_case(o.name(), n)
                })
            })
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            b.created_at_utc()
                .cmp(&a.created_at_utc())
                .then_with(|| b.id().cmp(&a.id()))
        });
        Ok(items
            .into_iter()
            .skip(skip.max(0) as usize)
            .take(take.max(0) as usize)
            .collect())
    }

    async fn update(&self, owner: &Owner) -> RepositoryResult<bool> {
        let mut data = self.data.write().await;
        match data.get_mut(&owner.id()) {
            Some(slot) => {
                *slot = owner.clone();
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
