use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::{
    domain::{
        errors::AuthError,
        models::{AuthToken, Credentials, RegisterUser},
        User,
    },
    ports::{
        repositories::UserRepository,
        security::{PasswordHasher, TokenProvider},
        services::AuthService,
    },
};

#[derive(Clone)]
pub struct AuthServiceImpl {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl AuthServiceImpl {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self { users, hasher, tokens }
    }

    fn issue_for(&self, user: &User) -> AuthToken {
        let (access_token, expires_at_utc) = self.tokens.issue(user);
        AuthToken {
            access_token,
            expires_at_utc,
            email: user.email().to_string(),
            role: user.role().to_string(),
        }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn register(&self, request: RegisterUser) -> Result<AuthToken, AuthError> {
        // User::new lowercases, so normalize the uniqueness probe the same way
        let email = request.email.trim().to_lowercase();
        if self.users.get_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let hash = self.hasher.hash(&request.password);
        let user = User::new(&request.email, &hash, &request.role)?;
        self.users.create(&user).await?;
        info!(user_id = %user.id(), "user registered");

        Ok(self.issue_for(&user))
    }

    async fn login(&self, credentials: Credentials) -> Result<AuthToken, AuthError> {
        let email = credentials.email.trim().to_lowercase();
        let Some(user) = self.users.get_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials);
        };
        if !self.hasher.verify(&credentials.password, user.password_hash()) {
            return Err(AuthError::InvalidCredentials);
        }
        Ok(self.issue_for(&user))
    }
}
