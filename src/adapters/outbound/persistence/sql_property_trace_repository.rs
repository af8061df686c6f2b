use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::{
    domain::{errors::RepositoryResult, PropertyTrace},
    ports::repositories::PropertyTraceRepository,
};

/// PostgreSQL implementation of PropertyTraceRepository.
#[derive(Clone)]
pub struct SqlPropertyTraceRepository {
    pool: PgPool,
}

impl SqlPropertyTraceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS property_traces (
                id UUID PRIMARY KEY,
                property_id UUID NOT NULL,
                date_utc TIMESTAMPTZ NOT NULL,
                document JSONB NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_property_traces_property_id
                ON property_traces(property_id, date_utc DESC);
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn row_to_trace(row: &sqlx::postgres::PgRow) -> RepositoryResult<PropertyTrace> {
    let document: serde_json::Value = row.try_get("document")?;
    Ok(serde_json::from_value(document)?)
}

#[async_trait]
impl PropertyTraceRepository for SqlPropertyTraceRepository {
    async fn create(&self, trace: &PropertyTrace) -> RepositoryResult<()> {
        let document = serde_json::to_value(trace)?;

        sqlx::query(
            "INSERT INTO property_traces (id, property_id, date_utc, document) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(trace.id())
        .bind(trace.property_id())
        .bind(trace.date_utc())
        .bind(&document)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_property_id(
        &self,
        property_id: Uuid,
    ) -> RepositoryResult<Vec<PropertyTrace>> {
        let rows = sqlx::query(
            "SELECT document FROM property_traces WHERE property_id = $1 \
             ORDER BY date_utc DESC, id DESC",
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_trace).collect()
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM property_traces WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
