use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::{
    domain::{errors::RepositoryResult, Owner},
    ports::repositories::OwnerRepository,
};

/// PostgreSQL implementation of OwnerRepository. JSONB document plus a
/// name column for the prefix search.
#[derive(Clone)]
pub struct SqlOwnerRepository {
    pool: PgPool,
}

impl SqlOwnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS owners (
                id UUID PRIMARY KEY,
                name VARCHAR(200) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                document JSONB NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_owners_name ON owners(name text_pattern_ops);
            CREATE INDEX IF NOT EXISTS idx_owners_created_at ON owners(created_at DESC);
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn row_to_owner(row: &sqlx::postgres::PgRow) -> RepositoryResult<Owner> {
    let document: serde_json::Value = row.try_get("document")?;
    Ok(serde_json::from_value(document)?)
}

#[async_trait]
impl OwnerRepository for SqlOwnerRepository {
    async fn create(&self, owner: &Owner) -> RepositoryResult<()> {
        let document = serde_json::to_value(owner)?;

        sqlx::query(
            "INSERT INTO owners (id, name, created_at, document) VALUES ($1, $2, $3, $4)",
        )
        .bind(owner.id())
        .bind(owner.name())
        .bind(owner.created_at_utc())
        .bind(&document)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<Owner>> {
        let row = sqlx::query("SELECT document FROM owners WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_owner).transpose()
    }

    async fn search(
        &self,
        name: Option<&str>,
        skip: i64,
        take: i64,
    ) -> RepositoryResult<Vec<Owner>> {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        let rows = match name {
            Some(name) => {
                let escaped = name
                    .replace('\\', "\\\\")
                    .replace('%', "\\%")
                    .replace('_', "\\_");
                sqlx::query(
                    "SELECT document FROM owners WHERE name ILIKE $1 \
                     ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3",
                )
                .bind(format!("{escaped}%"))
                .bind(take.max(0))
                .bind(skip.max(0))
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    "SELECT document FROM owners \
                     ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2",
                )
                .bind(take.max(0))
                .bind(skip.max(0))
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter().map(row_to_owner).collect()
    }

    async fn update(&self, owner: &Owner) -> RepositoryResult<bool> {
        let document = serde_json::to_value(owner)?;

        let result = sqlx::query("UPDATE owners SET name = $2, document = $3 WHERE id = $1")
            .bind(owner.id())
            .bind(owner.name())
            .bind(&document)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM owners WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
