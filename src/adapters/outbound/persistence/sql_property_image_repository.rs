use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::{
    domain::{errors::RepositoryResult, PropertyImage},
    ports::repositories::PropertyImageRepository,
};

/// PostgreSQL implementation of PropertyImageRepository.
#[derive(Clone)]
pub struct SqlPropertyImageRepository {
    pool: PgPool,
}

impl SqlPropertyImageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS property_images (
                id UUID PRIMARY KEY,
                property_id UUID NOT NULL,
                enabled BOOLEAN NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                document JSONB NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_property_images_property_id
                ON property_images(property_id);
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn row_to_image(row: &sqlx::postgres::PgRow) -> RepositoryResult<PropertyImage> {
    let document: serde_json::Value = row.try_get("document")?;
    Ok(serde_json::from_value(document)?)
}

#[async_trait]
impl PropertyImageRepository for SqlPropertyImageRepository {
    async fn create(&self, image: &PropertyImage) -> RepositoryResult<()> {
        let document = serde_json::to_value(image)?;

        sqlx::query(
            "INSERT INTO property_images (id, property_id, enabled, created_at, document) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(image.id())
        .bind(image.property_id())
        .bind(image.enabled())
        .bind(image.created_at_utc())
        .bind(&document)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<PropertyImage>> {
        let row = sqlx::query("SELECT document FROM property_images WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_image).transpose()
    }

    async fn get_by_property_id(
        &self,
        property_id: Uuid,
    ) -> RepositoryResult<Vec<PropertyImage>> {
        let rows = sqlx::query(
            "SELECT document FROM property_images WHERE property_id = $1 \
             ORDER BY created_at DESC, id DESC",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_image).collect()
    }

    async fn set_enabled(&self, id: Uuid, enabled: bool) -> RepositoryResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE property_images SET
                enabled = $2,
                document = jsonb_set(document, '{enabled}', to_jsonb($2::boolean))
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(enabled)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM property_images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
