//! Cart reader port (read side).
//!
//! Joins cart lines with catalog display data for listing. Kept apart from
//! the line repository so the listing query can be a single join.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CartId, CartItemId, DomainError, ItemId, Timestamp};

/// Reader port for cart listings.
#[async_trait]
pub trait CartReader: Send + Sync {
    /// List every line of a cart with item display data.
    ///
    /// Returns lines in insertion order, oldest first.
    async fn list_details(&self, cart_id: &CartId) -> Result<Vec<CartDetail>, DomainError>;
}

/// One cart line as shown to the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartDetail {
    /// Line ID (target of update/delete).
    pub cart_item_id: CartItemId,

    /// Catalog item on this line.
    pub item_id: ItemId,

    /// Item name.
    pub item_name: String,

    /// Unit price in minor currency units.
    pub price: i64,

    /// Units on this line.
    pub count: u32,

    /// Representative item image.
    pub image_url: Option<String>,

    /// When the line was first added.
    pub added_at: Timestamp,
}

impl CartDetail {
    /// Unit price times count.
    pub fn line_total(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.count))
    }
}
