use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    errors::ServiceResult,
    models::{CreateOwner, UpdateOwner},
    Owner,
};

/// Application-service contract for owners, consumed by the HTTP adapter.
#[async_trait]
pub trait OwnerService: Send + Sync + 'static {
    async fn create(&self, request: CreateOwner) -> ServiceResult<Owner>;

    async fn get_by_id(&self, id: Uuid) -> ServiceResult<Option<Owner>>;

    async fn search(
        &self,
        name: Option<&str>,
        skip: i64,
        take: i64,
    ) -> ServiceResult<Vec<Owner>>;

    async fn update(&self, id: Uuid, request: UpdateOwner) -> ServiceResult<bool>;

    async fn delete(&self, id: Uuid) -> ServiceResult<bool>;
}
