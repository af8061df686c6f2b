use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{errors::RepositoryResult, User},
    ports::repositories::UserRepository,
};

/// In-memory implementation of UserRepository for testing and development.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    data: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> RepositoryResult<()> {
        let mut data = self.data.write().await;
        data.insert(user.id(), user.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        let data = self.data.read().await;
        Ok(data.get(&id).cloned())
    }

    async fn get_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let data = self.data.read().await;
        Ok(data.values().find(|u| u.email() == email).cloned())
    }
}
