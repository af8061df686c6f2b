use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    errors::ServiceResult,
    models::{CreateProperty, PagedResult, PriceUpdate, PropertyFilter, UpdateProperty},
    Property,
};

/// Application-service contract for properties and the search engine.
#[async_trait]
pub trait PropertyService: Send + Sync + 'static {
    async fn create(&self, request: CreateProperty) -> ServiceResult<Property>;

    async fn get_by_id(&self, id: Uuid) -> ServiceResult<Option<Property>>;

    async fn search(
        &self,
        owner_id: Option<Uuid>,
        name: Option<&str>,
        skip: i64,
        take: i64,
    ) -> ServiceResult<Vec<Property>>;

    async fn search_paged(&self, filter: PropertyFilter)
        -> ServiceResult<PagedResult<Property>>;

    async fn update(&self, id: Uuid, request: UpdateProperty) -> ServiceResult<bool>;

    /// Replaces only the price value object via the repository. Distinct
    /// code path from `update`, not a derived call.
    async fn update_price(&self, id: Uuid, request: PriceUpdate) -> ServiceResult<bool>;

    async fn delete(&self, id: Uuid) -> ServiceResult<bool>;
}
