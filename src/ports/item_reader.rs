//! Item reader port.
//!
//! The catalog is an external collaborator; the cart only needs to resolve
//! an item by id before putting it in a cart.

use async_trait::async_trait;

use crate::domain::catalog::Item;
use crate::domain::foundation::{DomainError, ItemId};

/// Read-only lookup of purchasable items.
#[async_trait]
pub trait ItemReader: Send + Sync {
    /// Find an item by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError>;
}
