//! PostgreSQL implementation of CartItemRepository.
//!
//! An add runs in one transaction: the member's cart is upserted against
//! `UNIQUE (member_id)`, then the line is upserted against
//! `UNIQUE (cart_id, item_id)` with an in-database increment. Concurrent adds
//! of the same item merge into one line without losing a count, and a failed
//! line write leaves no cart behind.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::cart::{Cart, CartItem};
use crate::domain::foundation::{
    CartId, CartItemId, DomainError, ErrorCode, ItemId, MemberId, Quantity, Timestamp,
};
use crate::ports::{AddedLine, CartItemRepository};

const LINE_COLUMNS: &str = "id, cart_id, item_id, count, created_at, updated_at";

/// PostgreSQL implementation of CartItemRepository.
#[derive(Clone)]
pub struct PostgresCartItemRepository {
    pool: PgPool,
}

impl PostgresCartItemRepository {
    /// Creates a new PostgresCartItemRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartItemRepository for PostgresCartItemRepository {
    async fn find_by_id(&self, id: &CartItemId) -> Result<Option<CartItem>, DomainError> {
        let row = sqlx::query(&format!("SELECT {} FROM cart_items WHERE id = $1", LINE_COLUMNS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch cart item", e))?;

        row.map(row_to_cart_item).transpose()
    }

    async fn add_to_member_cart(
        &self,
        member_id: &MemberId,
        item_id: &ItemId,
        count: Quantity,
    ) -> Result<AddedLine, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to begin transaction: {}", e))
        })?;

        // Cart: created on the member's first add
        let cart = Cart::new(*member_id);
        sqlx::query(
            r#"
            INSERT INTO carts (id, member_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (member_id) DO NOTHING
            "#,
        )
        .bind(cart.id().as_uuid())
        .bind(member_id.as_uuid())
        .bind(cart.created_at().as_datetime())
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to insert cart", e))?;

        // Separate statement so a cart committed by a concurrent add is visible.
        let cart_id: uuid::Uuid = sqlx::query_scalar("SELECT id FROM carts WHERE member_id = $1")
            .bind(member_id.as_uuid())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| DomainError::database("Failed to fetch cart by member", e))?;

        // Line: insert, or grow the existing one in place
        let line = CartItem::new(CartId::from_uuid(cart_id), *item_id, count);
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO cart_items (id, cart_id, item_id, count, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (cart_id, item_id) DO UPDATE SET
                count = LEAST(cart_items.count + EXCLUDED.count, $7),
                updated_at = EXCLUDED.updated_at
            RETURNING {}, (xmax = 0) AS inserted
            "#,
            LINE_COLUMNS
        ))
        .bind(line.id().as_uuid())
        .bind(line.cart_id().as_uuid())
        .bind(line.item_id().as_uuid())
        .bind(line.count().value() as i32)
        .bind(line.created_at().as_datetime())
        .bind(line.updated_at().as_datetime())
        .bind(Quantity::MAX as i32)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database("Failed to upsert cart item", e))?;

        let created: bool = column(&row, "inserted")?;
        let line = row_to_cart_item(row)?;

        tx.commit().await.map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to commit transaction: {}", e))
        })?;

        Ok(AddedLine { line, created })
    }

    async fn update(&self, line: &CartItem) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE cart_items SET
                count = $2,
                updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(line.id().as_uuid())
        .bind(line.count().value() as i32)
        .bind(line.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update cart item", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::cart_item_not_found(line.id()));
        }

        Ok(())
    }

    async fn delete(&self, id: &CartItemId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete cart item", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::cart_item_not_found(id));
        }

        Ok(())
    }
}

fn row_to_cart_item(row: PgRow) -> Result<CartItem, DomainError> {
    let count: i32 = column(&row, "count")?;
    let count = Quantity::try_new(i64::from(count)).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid stored count: {}", e),
        )
    })?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    Ok(CartItem::reconstitute(
        CartItemId::from_uuid(column(&row, "id")?),
        CartId::from_uuid(column(&row, "cart_id")?),
        ItemId::from_uuid(column(&row, "item_id")?),
        count,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
