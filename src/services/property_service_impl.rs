use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::{
    domain::{
        errors::{ServiceResult, ValidationError},
        models::{CreateProperty, PagedResult, PriceUpdate, PropertyFilter, UpdateProperty},
        value_objects::{Address, Price},
        Property,
    },
    ports::{
        repositories::{OwnerRepository, PropertyRepository},
        services::PropertyService,
    },
};

#[derive(Clone)]
pub struct PropertyServiceImpl {
    repository: Arc<dyn PropertyRepository>,
    owners: Arc<dyn OwnerRepository>,
}

impl PropertyServiceImpl {
    pub fn new(repository: Arc<dyn PropertyRepository>, owners: Arc<dyn OwnerRepository>) -> Self {
        Self { repository, owners }
    }
}

#[async_trait]
impl PropertyService for PropertyServiceImpl {
    async fn create(&self, request: CreateProperty) -> ServiceResult<Property> {
        if self.owners.get_by_id(request.owner_id).await?.is_none() {
            return Err(ValidationError::UnknownOwner(request.owner_id).into());
        }

        let address = Address::new(
            &request.street,
            &request.city,
            &request.state,
            &request.country,
            &request.zip_code,
        )?;
        let price = Price::new(request.price, &request.currency)?;
        let property = Property::new(
            &request.name,
            address,
            price,
            request.year,
            request.area,
            request.owner_id,
            request.active,
        )?;

        self.repository.create(&property).await?;
        debug!(property_id = %property.id(), "property created");
        Ok(property)
    }

    async fn get_by_id(&self, id: Uuid) -> ServiceResult<Option<Property>> {
        Ok(self.repository.get_by_id(id).await?)
    }

    async fn search(
        &self,
        owner_id: Option<Uuid>,
        name: Option<&str>,
        skip: i64,
        take: i64,
    ) -> ServiceResult<Vec<Property>> {
        Ok(self.repository.search(owner_id, name, skip, take).await?)
    }

    async fn search_paged(
        &self,
        filter: PropertyFilter,
    ) -> ServiceResult<PagedResult<Property>> {
        Ok(self.repository.search_paged(&filter).await?)
    }

    async fn update(&self, id: Uuid, request: UpdateProperty) -> ServiceResult<bool> {
        let Some(mut property) = self.repository.get_by_id(id).await? else {
            return Ok(false);
        };
        let address = Address::new(
            &request.street,
            &request.city,
            &request.state,
            &request.country,
            &request.zip_code,
        )?;
        property.update_basics(&request.name, address, request.year, request.area)?;
        Ok(self.repository.update(&property).await?)
    }

    async fn update_price(&self, id: Uuid, request: PriceUpdate) -> ServiceResult<bool> {
        let price = Price::new(request.amount, &request.currency)?;
        Ok(self.repository.update_price(id, &price).await?)
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<bool> {
        Ok(self.repository.delete(id).await?)
    }
}
