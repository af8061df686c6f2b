use async_trait::async_trait;

use crate::domain::{
    errors::AuthError,
    models::{AuthToken, Credentials, RegisterUser},
};

/// Registration and login. Duplicate email and bad credentials surface as
/// [`AuthError`] variants, a different error class from domain validation.
#[async_trait]
pub trait AuthService: Send + Sync + 'static {
    async fn register(&self, request: RegisterUser) -> Result<AuthToken, AuthError>;

    async fn login(&self, credentials: Credentials) -> Result<AuthToken, AuthError>;
}
