//! Cart repository port.
//!
//! Carts are only created by `CartItemRepository::add_to_member_cart`, in the
//! same unit of work as their first line. At most one cart exists per member,
//! and carts are never deleted.

use async_trait::async_trait;

use crate::domain::cart::Cart;
use crate::domain::foundation::{CartId, DomainError, MemberId};

/// Repository port for Cart lookups.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Find a cart by its ID.
    async fn find_by_id(&self, id: &CartId) -> Result<Option<Cart>, DomainError>;

    /// Find the cart owned by a member.
    ///
    /// Returns `None` if the member has never added anything.
    async fn find_by_member(&self, member_id: &MemberId) -> Result<Option<Cart>, DomainError>;
}
