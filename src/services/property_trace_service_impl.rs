use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{errors::ServiceResult, models::CreateTrace, value_objects::Price, PropertyTrace},
    ports::{repositories::PropertyTraceRepository, services::PropertyTraceService},
};

#[derive(Clone)]
pub struct PropertyTraceServiceImpl {
    repository: Arc<dyn PropertyTraceRepository>,
}

impl PropertyTraceServiceImpl {
    pub fn new(repository: Arc<dyn PropertyTraceRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl PropertyTraceService for PropertyTraceServiceImpl {
    async fn create(&self, request: CreateTrace) -> ServiceResult<PropertyTrace> {
        let value = Price::new(request.amount, &request.currency)?;
        let trace = PropertyTrace::new(
            request.property_id,
            request.date_utc,
            &request.description,
            value,
        )?;
        self.repository.create(&trace).await?;
        Ok(trace)
    }

    async fn get_by_property_id(
        &self,
        property_id: Uuid,
    ) -> ServiceResult<Vec<PropertyTrace>> {
        Ok(self.repository.get_by_property_id(property_id).await?)
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<bool> {
        Ok(self.repository.delete(id).await?)
    }
}
