//! Cart line repository port (write side).
//!
//! Implementations must guarantee at most one line per (cart, item).
//! `add_to_member_cart` is the only insert path: it creates the member's cart
//! if needed and merges into an existing line, as one atomic unit, so racing
//! adds neither duplicate a line nor lose an increment.

use async_trait::async_trait;

use crate::domain::cart::CartItem;
use crate::domain::foundation::{CartId, CartItemId, DomainError, ItemId, MemberId, Quantity};

/// Outcome of adding an item to a member's cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedLine {
    /// The line after the add.
    pub line: CartItem,
    /// False when an existing line grew.
    pub created: bool,
}

/// Repository port for cart line persistence.
#[async_trait]
pub trait CartItemRepository: Send + Sync {
    /// Find a line by its ID.
    async fn find_by_id(&self, id: &CartItemId) -> Result<Option<CartItem>, DomainError>;

    /// Add `count` of `item_id` to the member's cart.
    ///
    /// Creates the cart on the member's first add. If the cart already holds
    /// a line for the item, its count grows by `count`, capped at
    /// `Quantity::MAX`. Either everything is persisted or nothing is.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn add_to_member_cart(
        &self,
        member_id: &MemberId,
        item_id: &ItemId,
        count: Quantity,
    ) -> Result<AddedLine, DomainError>;

    /// Persist the count of an existing line.
    ///
    /// # Errors
    ///
    /// - `CartItemNotFound` if the line doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, line: &CartItem) -> Result<(), DomainError>;

    /// Permanently delete a line.
    ///
    /// # Errors
    ///
    /// - `CartItemNotFound` if the line doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &CartItemId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_item_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn CartItemRepository) {}
    }
}
