//! PostgreSQL implementation of CartRepository.
//!
//! Carts are inserted by `PostgresCartItemRepository::add_to_member_cart`.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::column;
use crate::domain::cart::Cart;
use crate::domain::foundation::{CartId, DomainError, MemberId, Timestamp};
use crate::ports::CartRepository;

/// PostgreSQL implementation of CartRepository.
#[derive(Clone)]
pub struct PostgresCartRepository {
    pool: PgPool,
}

impl PostgresCartRepository {
    /// Creates a new PostgresCartRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for PostgresCartRepository {
    async fn find_by_id(&self, id: &CartId) -> Result<Option<Cart>, DomainError> {
        let row = sqlx::query("SELECT id, member_id, created_at FROM carts WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch cart", e))?;

        row.map(row_to_cart).transpose()
    }

    async fn find_by_member(&self, member_id: &MemberId) -> Result<Option<Cart>, DomainError> {
        let row = sqlx::query("SELECT id, member_id, created_at FROM carts WHERE member_id = $1")
            .bind(member_id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch cart by member", e))?;

        row.map(row_to_cart).transpose()
    }
}

fn row_to_cart(row: PgRow) -> Result<Cart, DomainError> {
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    Ok(Cart::reconstitute(
        CartId::from_uuid(column(&row, "id")?),
        MemberId::from_uuid(column(&row, "member_id")?),
        Timestamp::from_datetime(created_at),
    ))
}
