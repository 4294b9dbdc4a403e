//! CheckCartItemOwnerHandler - Query handler for cart line ownership.

use std::sync::Arc;

use crate::domain::cart::CartError;
use crate::domain::foundation::CartItemId;
use crate::ports::{CartItemRepository, CartRepository, MemberReader};

/// Does the requester own the cart holding this line?
#[derive(Debug, Clone)]
pub struct CheckCartItemOwnerQuery {
    pub cart_item_id: CartItemId,
    pub requester_email: String,
}

/// Handler for ownership checks ahead of line mutations.
///
/// Compares member ids, so an email change on the member record does not
/// affect ownership. An email with no member behind it owns nothing.
pub struct CheckCartItemOwnerHandler {
    lines: Arc<dyn CartItemRepository>,
    carts: Arc<dyn CartRepository>,
    members: Arc<dyn MemberReader>,
}

impl CheckCartItemOwnerHandler {
    pub fn new(
        lines: Arc<dyn CartItemRepository>,
        carts: Arc<dyn CartRepository>,
        members: Arc<dyn MemberReader>,
    ) -> Self {
        Self {
            lines,
            carts,
            members,
        }
    }

    pub async fn handle(&self, query: CheckCartItemOwnerQuery) -> Result<bool, CartError> {
        let line = self
            .lines
            .find_by_id(&query.cart_item_id)
            .await?
            .ok_or_else(|| CartError::cart_item_not_found(query.cart_item_id))?;

        let cart = self
            .carts
            .find_by_id(line.cart_id())
            .await?
            .ok_or_else(|| CartError::cart_not_found(*line.cart_id()))?;

        let Some(member) = self.members.find_by_email(&query.requester_email).await? else {
            tracing::warn!(email = %query.requester_email, "Ownership check for unknown member");
            return Ok(false);
        };

        let owned = cart.is_owned_by(member.id());
        if !owned {
            tracing::warn!(
                cart_item_id = %query.cart_item_id,
                member_id = %member.id(),
                "Member does not own cart item"
            );
        }
        Ok(owned)
    }
}
