use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        errors::ServiceResult,
        models::{CreateOwner, UpdateOwner},
        Owner,
    },
    ports::{repositories::OwnerRepository, services::OwnerService},
};

#[derive(Clone)]
pub struct OwnerServiceImpl {
    repository: Arc<dyn OwnerRepository>,
}

impl OwnerServiceImpl {
    pub fn new(repository: Arc<dyn OwnerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl OwnerService for OwnerServiceImpl {
    async fn create(&self, request: CreateOwner) -> ServiceResult<Owner> {
        let owner = Owner::new(&request.name, &request.address, &request.photo)?;
        self.repository.create(&owner).await?;
        Ok(owner)
    }

    async fn get_by_id(&self, id: Uuid) -> ServiceResult<Option<Owner>> {
        Ok(self.repository.get_by_id(id).await?)
    }

    async fn search(
        &self,
        name: Option<&str>,
        skip: i64,
        take: i64,
    ) -> ServiceResult<Vec<Owner>> {
        Ok(self.repository.search(name, skip, take).await?)
    }

    async fn update(&self, id: Uuid, request: UpdateOwner) -> ServiceResult<bool> {
        let Some(mut owner) = self.repository.get_by_id(id).await? else {
            return Ok(false);
        };
        owner.update(&request.name, &request.address, &request.photo)?;
        Ok(self.repository.update(&owner).await?)
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<bool> {
        Ok(self.repository.delete(id).await?)
    }
}
