//! PostgreSQL implementation of CartReader.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::foundation::{CartId, CartItemId, DomainError, ItemId, Timestamp};
use crate::ports::{CartDetail, CartReader};

/// PostgreSQL implementation of CartReader.
#[derive(Clone)]
pub struct PostgresCartReader {
    pool: PgPool,
}

impl PostgresCartReader {
    /// Creates a new PostgresCartReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartReader for PostgresCartReader {
    async fn list_details(&self, cart_id: &CartId) -> Result<Vec<CartDetail>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT ci.id AS cart_item_id, ci.item_id, i.name AS item_name, i.price,
                   ci.count, i.image_url, ci.created_at
            FROM cart_items ci
            JOIN items i ON i.id = ci.item_id
            WHERE ci.cart_id = $1
            ORDER BY ci.created_at ASC, ci.id ASC
            "#,
        )
        .bind(cart_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list cart details", e))?;

        rows.into_iter().map(row_to_detail).collect()
    }
}

fn row_to_detail(row: PgRow) -> Result<CartDetail, DomainError> {
    let count: i32 = column(&row, "count")?;
    let added_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;

    Ok(CartDetail {
        cart_item_id: CartItemId::from_uuid(column(&row, "cart_item_id")?),
        item_id: ItemId::from_uuid(column(&row, "item_id")?),
        item_name: column(&row, "item_name")?,
        price: column(&row, "price")?,
        count: count.max(0) as u32,
        image_url: column(&row, "image_url")?,
        added_at: Timestamp::from_datetime(added_at),
    })
}
