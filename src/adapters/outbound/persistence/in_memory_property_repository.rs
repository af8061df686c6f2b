use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{
        errors::RepositoryResult,
        models::{filter::starts_with_ignore_case, PagedResult, PropertyFilter},
        value_objects::Price,
        Property,
    },
    ports::repositories::PropertyRepository,
};

/// In-memory implementation of PropertyRepository for testing and
/// development. Runs [`PropertyFilter::matches`] directly and sorts by
/// creation time descending (id as tiebreak for a deterministic total
/// order).
#[derive(Clone, Default)]
pub struct InMemoryPropertyRepository {
    data: Arc<RwLock<HashMap<Uuid, Property>>>,
}

impl InMemoryPropertyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn sort_newest_first(items: &mut [Property]) {
        items.sort_by(|a, b| {
            b.created_at_utc()
                .cmp(&a.created_at_utc())
                .then_with(|| b.id().cmp(&a.id()))
        });
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn create(&self, property: &Property) -> RepositoryResult<()> {
        let mut data = self.data.write().await;
        data.insert(property.id(), property.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<Property>> {
        let data = self.data.read().await;
        Ok(data.get(&id).cloned())
    }

    async fn search(
        &self,
        owner_id: Option<Uuid>,
        name: Option<&str>,
        skip: i64,
        take: i64,
    ) -> RepositoryResult<Vec<Property>> {
        let data = self.data.read().await;
        let mut items: Vec<Property> = data
            .values()
            .filter(|p| owner_id.map_or(true, |o| p.owner_id() == o))
            .filter(|p| {
                name.map(str::trim).filter(|n| !n.is_empty()).map_or(true, |n| {
                    starts_with_ignore_case(p.name(), n)
                })
            })
            .cloned()
            .collect();
        Self::sort_newest_first(&mut items);
        Ok(items
            .into_iter()
            .skip(skip.max(0) as usize)
            .take(take.max(0) as usize)
            .collect())
    }

    async fn search_paged(
        &self,
        filter: &PropertyFilter,
    ) -> RepositoryResult<PagedResult<Property>> {
        let data = self.data.read().await;
        let mut matching: Vec<Property> =
            data.values().filter(|p| filter.matches(p)).cloned().collect();
        Self::sort_newest_first(&mut matching);

        let total = matching.len() as i64;
        let items = matching
            .into_iter()
            .skip(filter.skip() as usize)
            .take(filter.page_size() as usize)
            .collect();

        Ok(PagedResult {
            items,
            page: filter.page(),
            page_size: filter.page_size(),
            total,
        })
    }

    async fn update(&self, property: &Property) -> RepositoryResult<bool> {
        let mut data = self.data.write().await;
        match data.get_mut(&property.id()) {
            Some(slot) => {
                *slot = property.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn update_price(&self, id: Uuid, price: &Price) -> RepositoryResult<bool> {
        let mut data = self.data.write().await;
        match data.get_mut(&id) {
            Some(property) => {
                property.change_price(price.clone());
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
