use anyhow::{Context, Result};
use clap::Parser;
use realty_catalog::{
    adapters::inbound::http::create_router,
    app::{AppBuilder, AppConfig, AuthConfig, RepositoryBackend, UploadConfig},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "realty-server")]
#[command(about = "Real estate catalog API server", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "8080")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Repository backend type ("memory" or "postgres")
    #[arg(long, env = "REPOSITORY_BACKEND", default_value = "memory")]
    repository_backend: String,

    /// Database URL for the postgres backend
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Secret for signing bearer tokens
    #[arg(long, env = "JWT_SECRET", default_value = "development-secret-change-me")]
    jwt_secret: String,

    /// Bearer token lifetime in minutes
    #[arg(long, env = "TOKEN_TTL_MINUTES", default_value = "60")]
    token_ttl_minutes: i64,

    /// Directory for uploaded property images
    #[arg(long, env = "UPLOAD_DIR", default_value = "./data/uploads")]
    upload_dir: PathBuf,

    /// Base URL under which uploads are served
    #[arg(long, env = "PUBLIC_BASE_URL", default_value = "http://localhost:8080/files")]
    public_base_url: String,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig> {
        let repository_backend = match self.repository_backend.as_str() {
            "memory" => RepositoryBackend::InMemory,
            "postgres" | "database" | "db" => {
                let connection_string = self
                    .database_url
                    .clone()
                    .context("DATABASE_URL is required for the postgres backend")?;
                RepositoryBackend::Postgres { connection_string }
            }
            _ => anyhow::bail!("Unknown repository backend: {}", self.repository_backend),
        };

        Ok(AppConfig {
            repository_backend,
            auth: AuthConfig {
                secret: self.jwt_secret.clone(),
                token_ttl_minutes: self.token_ttl_minutes,
            },
            uploads: UploadConfig {
                root: self.upload_dir.clone(),
                public_base_url: self.public_base_url.clone(),
            },
        })
    }

    fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_level.clone()));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging();

    info!("Starting realty catalog server");
    info!("Repository backend: {}", cli.repository_backend);

    let config = cli.to_app_config()?;

    let state = AppBuilder::new()
        .with_config(config)
        .build()
        .await
        .context("Failed to build application")?;

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port)
        .parse()
        .context("Invalid host/port")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("Listening on {addr}");
    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
