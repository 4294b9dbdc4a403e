//! PostgreSQL implementation of ItemReader.

use async_trait::async_trait;
use sqlx::PgPool;

use super::column;
use crate::domain::catalog::Item;
use crate::domain::foundation::{DomainError, ItemId};
use crate::ports::ItemReader;

/// PostgreSQL implementation of ItemReader.
#[derive(Clone)]
pub struct PostgresItemReader {
    pool: PgPool,
}

impl PostgresItemReader {
    /// Creates a new PostgresItemReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemReader for PostgresItemReader {
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        let row = sqlx::query("SELECT id, name, price, image_url FROM items WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch item", e))?;

        match row {
            Some(row) => Ok(Some(Item::reconstitute(
                ItemId::from_uuid(column(&row, "id")?),
                column(&row, "name")?,
                column(&row, "price")?,
                column(&row, "image_url")?,
            ))),
            None => Ok(None),
        }
    }
}
