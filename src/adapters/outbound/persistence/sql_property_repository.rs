use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::{
    domain::{
        errors::RepositoryResult,
        models::{PagedResult, PropertyFilter},
        value_objects::Price,
        Property,
    },
    ports::repositories::PropertyRepository,
};

/// PostgreSQL implementation of PropertyRepository.
///
/// Each property is persisted as a JSONB document plus extracted filter
/// columns, so the search engine runs against plain indexed columns while
/// reads rehydrate the full document. The text criterion compiles to
/// anchored `ILIKE prefix%` per field, the index-friendly equivalent of the
/// in-memory prefix predicate.
#[derive(Clone)]
pub struct SqlPropertyRepository {
    pool: PgPool,
}

impl SqlPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Initialize database tables
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        // raw_sql: multiple DDL statements per round trip
        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS properties (
                id UUID PRIMARY KEY,
                owner_id UUID NOT NULL,
                name VARCHAR(200) NOT NULL,
                street VARCHAR(200) NOT NULL,
                city VARCHAR(100) NOT NULL,
                state VARCHAR(100) NOT NULL DEFAULT '',
                country VARCHAR(100) NOT NULL,
                zip_code VARCHAR(20) NOT NULL,
                price_amount DOUBLE PRECISION NOT NULL,
                year INT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL,
                document JSONB NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_properties_owner_id ON properties(owner_id);
            CREATE INDEX IF NOT EXISTS idx_properties_created_at ON properties(created_at DESC);
            CREATE INDEX IF NOT EXISTS idx_properties_price_amount ON properties(price_amount);
            CREATE INDEX IF NOT EXISTS idx_properties_name ON properties(name text_pattern_ops);
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Conjunction of the supplied criteria, with `$n` placeholders starting
    /// at 1. Returns the clause and the number of placeholders used.
    fn where_clause(filter: &PropertyFilter) -> (String, usize) {
        let mut conditions = Vec::new();
        let mut idx = 0usize;

        if filter.owner_id.is_some() {
            idx += 1;
            conditions.push(format!("owner_id = ${idx}"));
        }
        if filter.text().is_some() {
            idx += 1;
            conditions.push(format!(
                "(name ILIKE ${idx} OR street ILIKE ${idx} OR city ILIKE ${idx} \
                 OR state ILIKE ${idx} OR country ILIKE ${idx} OR zip_code ILIKE ${idx})"
            ));
        }
        if filter.price_min.is_some() {
            idx += 1;
            conditions.push(format!("price_amount >= ${idx}"));
        }
        if filter.price_max.is_some() {
            idx += 1;
            conditions.push(format!("price_amount <= ${idx}"));
        }
        if filter.year.is_some() {
            idx += 1;
            conditions.push(format!("year = ${idx}"));
        }

        if conditions.is_empty() {
            (String::new(), idx)
        } else {
            (format!(" WHERE {}", conditions.join(" AND ")), idx)
        }
    }
}

/// Anchored prefix pattern for ILIKE, with the wildcard characters of the
/// user's text escaped.
fn prefix_pattern(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("{escaped}%")
}

fn row_to_property(row: &sqlx::postgres::PgRow) -> RepositoryResult<Property> {
    let document: serde_json::Value = row.try_get("document")?;
    Ok(serde_json::from_value(document)?)
}

#[async_trait]
impl PropertyRepository for SqlPropertyRepository {
    async fn create(&self, property: &Property) -> RepositoryResult<()> {
        let document = serde_json::to_value(property)?;
        let address = property.address();

        sqlx::query(
            r#"
            INSERT INTO properties (
                id, owner_id, name, street, city, state, country, zip_code,
                price_amount, year, created_at, document
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(property.id())
        .bind(property.owner_id())
        .bind(property.name())
        .bind(address.street())
        .bind(address.city())
        .bind(address.state())
        .bind(address.country())
        .bind(address.zip_code())
        .bind(property.price().amount())
        .bind(property.year())
        .bind(property.created_at_utc())
        .bind(&document)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Option<Property>> {
        let row = sqlx::query("SELECT document FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_property).transpose()
    }

    async fn search(
        &self,
        owner_id: Option<Uuid>,
        name: Option<&str>,
        skip: i64,
        take: i64,
    ) -> RepositoryResult<Vec<Property>> {
        let filter = PropertyFilter {
            owner_id,
            text: None,
            ..Default::default()
        };
        let name = name.map(str::trim).filter(|n| !n.is_empty());

        let mut conditions = Vec::new();
        let mut idx = 0usize;
        if filter.owner_id.is_some() {
            idx += 1;
            conditions.push(format!("owner_id = ${idx}"));
        }
        if name.is_some() {
            idx += 1;
            conditions.push(format!("name ILIKE ${idx}"));
        }
        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", conditions.join(" AND "))
        };
        let sql = format!(
            "SELECT document FROM properties{where_clause} \
             ORDER BY created_at DESC, id DESC LIMIT ${} OFFSET ${}",
            idx + 1,
            idx + 2
        );

        let mut query = sqlx::query(&sql);
        if let Some(owner_id) = filter.owner_id {
            query = query.bind(owner_id);
        }
        if let Some(name) = name {
            query = query.bind(prefix_pattern(name));
        }
        let rows = query
            .bind(take.max(0))
            .bind(skip.max(0))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_property).collect()
    }

    async fn search_paged(
        &self,
        filter: &PropertyFilter,
    ) -> RepositoryResult<PagedResult<Property>> {
        let (where_clause, idx) = Self::where_clause(filter);
        let pattern = filter.text().map(prefix_pattern);

        // Two-phase count-then-fetch; not a single snapshot, so the total
        // can lag the page slightly under concurrent writes.
        let count_sql = format!("SELECT COUNT(*) FROM properties{where_clause}");
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(owner_id) = filter.owner_id {
            count_query = count_query.bind(owner_id);
        }
        if let Some(pattern) = &pattern {
            count_query = count_query.bind(pattern.clone());
        }
        if let Some(min) = filter.price_min {
            count_query = count_query.bind(min);
        }
        if let Some(max) = filter.price_max {
            count_query = count_query.bind(max);
        }
        if let Some(year) = filter.year {
            count_query = count_query.bind(year);
        }
        let total = count_query.fetch_one(&self.pool).await?;

        let page_sql = format!(
            "SELECT document FROM properties{where_clause} \
             ORDER BY created_at DESC, id DESC LIMIT ${} OFFSET ${}",
            idx + 1,
            idx + 2
        );
        let mut page_query = sqlx::query(&page_sql);
        if let Some(owner_id) = filter.owner_id {
            page_query = page_query.bind(owner_id);
        }
        if let Some(pattern) = &pattern {
            page_query = page_query.bind(pattern.clone());
        }
        if let Some(min) = filter.price_min {
            page_query = page_query.bind(min);
        }
        if let Some(max) = filter.price_max {
            page_query = page_query.bind(max);
        }
        if let Some(year) = filter.year {
            page_query = page_query.bind(year);
        }
        let rows = page_query
            .bind(filter.page_size())
            .bind(filter.skip())
            .fetch_all(&self.pool)
            .await?;

        let items = rows
            .iter()
            .map(row_to_property)
            .collect::<RepositoryResult<Vec<_>>>()?;

        Ok(PagedResult {
            items,
            page: filter.page(),
            page_size: filter.page_size(),
            total,
        })
    }

    async fn update(&self, property: &Property) -> RepositoryResult<bool> {
        let document = serde_json::to_value(property)?;
        let address = property.address();

        let result = sqlx::query(
            r#"
            UPDATE properties SET
                owner_id = $2, name = $3, street = $4, city = $5, state = $6,
                country = $7, zip_code = $8, price_amount = $9, year = $10,
                document = $11
            WHERE id = $1
            "#,
        )
        .bind(property.id())
        .bind(property.owner_id())
        .bind(property.name())
        .bind(address.street())
        .bind(address.city())
        .bind(address.state())
        .bind(address.country())
        .bind(address.zip_code())
        .bind(property.price().amount())
        .bind(property.year())
        .bind(&document)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_price(&self, id: Uuid, price: &Price) -> RepositoryResult<bool> {
        let price_doc = serde_json::to_value(price)?;

        // single-field path: replaces only the nested price document
        let result = sqlx::query(
            r#"
            UPDATE properties SET
                price_amount = $2,
                document = jsonb_set(document, '{price}', $3)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(price.amount())
        .bind(&price_doc)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
