use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    errors::RepositoryResult,
    models::{PagedResult, PropertyFilter},
    value_objects::Price,
    Property,
};

/// Persistence contract for properties, including the search engine entry
/// point. Implementations must reproduce the semantics of
/// [`PropertyFilter::matches`] and order results by creation time
/// descending so that pages partition one consistent total ordering.
#[async_trait]
pub trait PropertyRepository: Send + Sync + 'static {
    async fn create(&self, property: &Property) -> RepositoryResult<()>;

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<Property>>;

    /// Unpaged convenience search: owner plus name prefix, skip/take.
    async fn search(
        &self,
        owner_id: Option<Uuid>,
        name: Option<&str>,
        skip: i64,
        take: i64,
    ) -> RepositoryResult<Vec<Property>>;

    /// Paged composite search: count of all matches, then one page.
    async fn search_paged(&self, filter: &PropertyFilter)
        -> RepositoryResult<PagedResult<Property>>;

    /// Replace-by-id; `false` when no document matched (e.g. lost a race
    /// against a concurrent delete).
    async fn update(&self, property: &Property) -> RepositoryResult<bool>;

    /// Replaces only the nested price document. A distinct single-field
    /// path, not a full replace.
    async fn update_price(&self, id: Uuid, price: &Price) -> RepositoryResult<bool>;

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool>;
}
