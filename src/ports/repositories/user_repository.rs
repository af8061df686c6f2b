use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::RepositoryResult, User};

/// Persistence contract for API users.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    async fn create(&self, user: &User) -> RepositoryResult<()>;

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>>;

    /// Lookup by (already lowercased) email.
    async fn get_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
}
