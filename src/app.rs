//! Application factory: configuration plus the wiring that turns adapters
//! into the service graph the HTTP router consumes.

use sqlx::postgres::PgPoolOptions;
use std::{path::PathBuf, sync::Arc};

use crate::{
    adapters::{
        inbound::http::AppState,
        outbound::{
            persistence::{
                migrate_all, InMemoryOwnerRepository, InMemoryPropertyImageRepository,
                InMemoryPropertyRepository, InMemoryPropertyTraceRepository,
                InMemoryUserRepository, SqlOwnerRepository, SqlPropertyImageRepository,
                SqlPropertyRepository, SqlPropertyTraceRepository, SqlUserRepository,
            },
            security::{HmacTokenProvider, Sha256PasswordHasher},
            storage::LocalFileStore,
        },
    },
    ports::{
        repositories::{
            OwnerRepository, PropertyImageRepository, PropertyRepository,
            PropertyTraceRepository, UserRepository,
        },
        security::{PasswordHasher, TokenProvider},
        storage::FileStore,
    },
    services::{
        AuthServiceImpl, OwnerServiceImpl, PropertyImageServiceImpl, PropertyServiceImpl,
        PropertyTraceServiceImpl,
    },
};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub repository_backend: RepositoryBackend,
    pub auth: AuthConfig,
    pub uploads: UploadConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            repository_backend: RepositoryBackend::InMemory,
            auth: AuthConfig::default(),
            uploads: UploadConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub token_ttl_minutes: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-change-me".to_string(),
            token_ttl_minutes: 60,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub root: PathBuf,
    pub public_base_url: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("./data/uploads"),
            public_base_url: "http://localhost:8080/files".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum RepositoryBackend {
    InMemory,
    Postgres { connection_string: String },
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("repository initialization error: {0}")]
    RepositoryInit(#[from] sqlx::Error),

    #[error("upload store initialization error: {0}")]
    StorageInit(String),
}

struct Repositories {
    owners: Arc<dyn OwnerRepository>,
    properties: Arc<dyn PropertyRepository>,
    images: Arc<dyn PropertyImageRepository>,
    traces: Arc<dyn PropertyTraceRepository>,
    users: Arc<dyn UserRepository>,
}

pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_repository_backend(mut self, backend: RepositoryBackend) -> Self {
        self.config.repository_backend = backend;
        self
    }

    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.config.auth = auth;
        self
    }

    pub fn with_uploads(mut self, uploads: UploadConfig) -> Self {
        self.config.uploads = uploads;
        self
    }

    /// Wires repositories, security adapters and the upload store into
    /// the state the router needs.
    pub async fn build(self) -> Result<AppState, AppError> {
        let repos = self.create_repositories().await?;

        let tokens: Arc<dyn TokenProvider> = Arc::new(HmacTokenProvider::new(
            self.config.auth.secret.as_bytes(),
            self.config.auth.token_ttl_minutes,
        ));
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Sha256PasswordHasher::new());
        let files: Arc<dyn FileStore> = Arc::new(
            LocalFileStore::new(&self.config.uploads.root, &self.config.uploads.public_base_url)
                .map_err(|e| AppError::StorageInit(e.to_string()))?,
        );

        let uploads_dir = self.config.uploads.root.clone();
        Ok(Self::assemble(repos, tokens, hasher, files, uploads_dir))
    }

    fn assemble(
        repos: Repositories,
        tokens: Arc<dyn TokenProvider>,
        hasher: Arc<dyn PasswordHasher>,
        files: Arc<dyn FileStore>,
        uploads_dir: PathBuf,
    ) -> AppState {
        AppState {
            owner_service: Arc::new(OwnerServiceImpl::new(repos.owners.clone())),
            property_service: Arc::new(PropertyServiceImpl::new(
                repos.properties.clone(),
                repos.owners,
            )),
            image_service: Arc::new(PropertyImageServiceImpl::new(repos.images)),
            trace_service: Arc::new(PropertyTraceServiceImpl::new(repos.traces)),
            auth_service: Arc::new(AuthServiceImpl::new(repos.users, hasher, tokens.clone())),
            tokens,
            files,
            uploads_dir,
        }
    }

    async fn create_repositories(&self) -> Result<Repositories, AppError> {
        match &self.config.repository_backend {
            RepositoryBackend::InMemory => Ok(Repositories {
                owners: Arc::new(InMemoryOwnerRepository::new()),
                properties: Arc::new(InMemoryPropertyRepository::new()),
                images: Arc::new(InMemoryPropertyImageRepository::new()),
                traces: Arc::new(InMemoryPropertyTraceRepository::new()),
                users: Arc::new(InMemoryUserRepository::new()),
            }),
            RepositoryBackend::Postgres { connection_string } => {
                let pool = PgPoolOptions::new()
                    .max_connections(10)
                    .connect(connection_string)
                    .await?;
                migrate_all(&pool).await?;
                Ok(Repositories {
                    owners: Arc::new(SqlOwnerRepository::new(pool.clone())),
                    properties: Arc::new(SqlPropertyRepository::new(pool.clone())),
                    images: Arc::new(SqlPropertyImageRepository::new(pool.clone())),
                    traces: Arc::new(SqlPropertyTraceRepository::new(pool.clone())),
                    users: Arc::new(SqlUserRepository::new(pool)),
                })
            }
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory application for tests and local development. Uses a cheap
/// hash iteration count so register/login stay fast under test.
pub async fn create_in_memory_app() -> Result<AppState, AppError> {
    let config = AppConfig::default();
    let repos = Repositories {
        owners: Arc::new(InMemoryOwnerRepository::new()),
        properties: Arc::new(InMemoryPropertyRepository::new()),
        images: Arc::new(InMemoryPropertyImageRepository::new()),
        traces: Arc::new(InMemoryPropertyTraceRepository::new()),
        users: Arc::new(InMemoryUserRepository::new()),
    };
    let tokens: Arc<dyn TokenProvider> = Arc::new(HmacTokenProvider::new(
        config.auth.secret.as_bytes(),
        config.auth.token_ttl_minutes,
    ));
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Sha256PasswordHasher::with_iterations(64));
    let uploads_dir = std::env::temp_dir().join("realty-uploads");
    let files: Arc<dyn FileStore> = Arc::new(
        LocalFileStore::new(&uploads_dir, &config.uploads.public_base_url)
            .map_err(|e| AppError::StorageInit(e.to_string()))?,
    );
    Ok(AppBuilder::assemble(repos, tokens, hasher, files, uploads_dir))
}
