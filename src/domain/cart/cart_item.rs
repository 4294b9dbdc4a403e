//! Cart line entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CartId, CartItemId, ItemId, Quantity, Timestamp};

/// One (item, quantity) pairing within a cart.
///
/// # Invariants
///
/// - `count` is always a valid `Quantity` (>= 1)
/// - At most one line exists per (cart, item); repository implementations
///   enforce this at the storage layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    id: CartItemId,
    cart_id: CartId,
    item_id: ItemId,
    count: Quantity,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl CartItem {
    /// Create a new line for an item not yet in the cart.
    pub fn new(cart_id: CartId, item_id: ItemId, count: Quantity) -> Self {
        let now = Timestamp::now();
        Self {
            id: CartItemId::new(),
            cart_id,
            item_id,
            count,
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a line from persistence.
    pub fn reconstitute(
        id: CartItemId,
        cart_id: CartId,
        item_id: ItemId,
        count: Quantity,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            cart_id,
            item_id,
            count,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &CartItemId {
        &self.id
    }

    pub fn cart_id(&self) -> &CartId {
        &self.cart_id
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn count(&self) -> Quantity {
        self.count
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Accumulate more units of the same item onto this line.
    pub fn add_count(&mut self, count: Quantity) {
        self.count = self.count.saturating_add(count);
        self.updated_at = Timestamp::now();
    }

    /// Overwrite the line quantity.
    pub fn update_count(&mut self, count: Quantity) {
        self.count = count;
        self.updated_at = Timestamp::now();
    }
}
