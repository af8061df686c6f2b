use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::{
    domain::{errors::RepositoryResult, User},
    ports::repositories::UserRepository,
};

/// PostgreSQL implementation of UserRepository. The unique index on email
/// backs the duplicate-registration check.
#[derive(Clone)]
pub struct SqlUserRepository {
    pool: PgPool,
}

impl SqlUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id UUID PRIMARY KEY,
                email VARCHAR(200) NOT NULL UNIQUE,
                created_at TIMESTAMPTZ NOT NULL,
                document JSONB NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> RepositoryResult<User> {
    let document: serde_json::Value = row.try_get("document")?;
    Ok(serde_json::from_value(document)?)
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn create(&self, user: &User) -> RepositoryResult<()> {
        let document = serde_json::to_value(user)?;

        sqlx::query(
            "INSERT INTO users (id, email, created_at, document) VALUES ($1, $2, $3, $4)",
        )
        .bind(user.id())
        .bind(user.email())
        .bind(user.created_at_utc())
        .bind(&document)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        let row = sqlx::query("SELECT document FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn get_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let row = sqlx::query("SELECT document FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_user).transpose()
    }
}
