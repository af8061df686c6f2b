mod in_memory_owner_repository;
mod in_memory_property_image_repository;
mod in_memory_property_repository;
mod in_memory_property_trace_repository;
mod in_memory_user_repository;
mod sql_owner_repository;
mod sql_property_image_repository;
mod sql_property_repository;
mod sql_property_trace_repository;
mod sql_user_repository;

pub use in_memory_owner_repository::InMemoryOwnerRepository;
pub use in_memory_property_image_repository::InMemoryPropertyImageRepository;
pub use in_memory_property_repository::InMemoryPropertyRepository;
pub use in_memory_property_trace_repository::InMemoryPropertyTraceRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
pub use sql_owner_repository::SqlOwnerRepository;
pub use sql_property_image_repository::SqlPropertyImageRepository;
pub use sql_property_repository::SqlPropertyRepository;
pub use sql_property_trace_repository::SqlPropertyTraceRepository;
pub use sql_user_repository::SqlUserRepository;

/// Create all tables for the Postgres backend.
pub async fn migrate_all(pool: &sqlx::PgPool) -> Result<(), sqlx::Error> {
    SqlOwnerRepository::new(pool.clone()).migrate().await?;
    SqlPropertyRepository::new(pool.clone()).migrate().await?;
    SqlPropertyImageRepository::new(pool.clone()).migrate().await?;
    SqlPropertyTraceRepository::new(pool.clone()).migrate().await?;
    SqlUserRepository::new(pool.clone()).migrate().await?;
    Ok(())
}
