use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::RepositoryResult, Owner};

/// Persistence contract for owners.
///
/// Not-found is a `false`/`None` return on every path, never an error.
#[async_trait]
pub trait OwnerRepository: Send + Sync + 'static {
    async fn create(&self, owner: &Owner) -> RepositoryResult<()>;

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<Owner>>;

    /// Case-insensitive name prefix search with skip/take paging.
    async fn search(
        &self,
        name: Option<&str>,
        skip: i64,
        take: i64,
    ) -> RepositoryResult<Vec<Owner>>;

    /// Replace-by-id; `false` when no document matched.
    async fn update(&self, owner: &Owner) -> RepositoryResult<bool>;

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool>;
}
