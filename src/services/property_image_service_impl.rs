use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{errors::ServiceResult, models::CreateImage, PropertyImage},
    ports::{repositories::PropertyImageRepository, services::PropertyImageService},
};

#[derive(Clone)]
pub struct PropertyImageServiceImpl {
    repository: Arc<dyn PropertyImageRepository>,
}

impl PropertyImageServiceImpl {
    pub fn new(repository: Arc<dyn PropertyImageRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PropertyImageService for PropertyImageServiceImpl {
    async fn create(&self, request: CreateImage) -> ServiceResult<PropertyImage> {
        let image = PropertyImage::new(
            request.property_id,
            &request.url,
            &request.description,
            request.enabled,
        )?;
        self.repository.create(&image).await?;
        Ok(image)
    }

    async fn get_by_property_id(
        &self,
        property_id: Uuid,
    ) -> ServiceResult<Vec<PropertyImage>> {
        Ok(self.repository.get_by_property_id(property_id).await?)
    }

    async fn set_enabled(&self, id: Uuid, enabled: bool) -> ServiceResult<bool> {
        Ok(self.repository.set_enabled(id, enabled).await?)
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<bool> {
        Ok(self.repository.delete(id).await?)
    }
}
