//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresItemReader` - Catalog lookups (`items`)
//! - `PostgresMemberReader` - Member lookups (`members`)
//! - `PostgresCartRepository` - Carts, unique per member (`carts`)
//! - `PostgresCartItemRepository` - Lines, unique per (cart, item) (`cart_items`)
//! - `PostgresCartReader` - Listing join of `cart_items` and `items`
//!
//! Schema lives in `migrations/`.

mod cart_item_repository;
mod cart_reader;
mod cart_repository;
mod item_reader;
mod member_reader;

pub use cart_item_repository::PostgresCartItemRepository;
pub use cart_reader::PostgresCartReader;
pub use cart_repository::PostgresCartRepository;
pub use item_reader::PostgresItemReader;
pub use member_reader::PostgresMemberReader;

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Create a connection pool from configuration.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(Some(config.idle_timeout()))
        .max_lifetime(Some(config.max_lifetime()))
        .connect(config.url())
        .await
}

/// Apply pending migrations from `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Ping the database, for readiness checks.
pub async fn ping(pool: &PgPool, timeout: Duration) -> bool {
    matches!(
        tokio::time::timeout(timeout, sqlx::query("SELECT 1").execute(pool)).await,
        Ok(Ok(_))
    )
}

/// Read a column, mapping decode failures to `DatabaseError`.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}
