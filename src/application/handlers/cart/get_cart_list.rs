//! GetCartListHandler - Query handler for a member's cart contents.

use std::sync::Arc;

use crate::domain::cart::CartError;
use crate::ports::{CartDetail, CartReader, CartRepository, MemberReader};

/// Query for the requester's cart.
#[derive(Debug, Clone)]
pub struct GetCartListQuery {
    pub requester_email: String,
}

/// Handler for listing cart contents.
///
/// Lines come back oldest first. A member without a cart, or an email with
/// no member behind it, sees an empty list.
pub struct GetCartListHandler {
    members: Arc<dyn MemberReader>,
    carts: Arc<dyn CartRepository>,
    reader: Arc<dyn CartReader>,
}

impl GetCartListHandler {
    pub fn new(
        members: Arc<dyn MemberReader>,
        carts: Arc<dyn CartRepository>,
        reader: Arc<dyn CartReader>,
    ) -> Self {
        Self {
            members,
            carts,
            reader,
        }
    }

    pub async fn handle(&self, query: GetCartListQuery) -> Result<Vec<CartDetail>, CartError> {
        let Some(member) = self.members.find_by_email(&query.requester_email).await? else {
            tracing::debug!(email = %query.requester_email, "No member for email, empty cart");
            return Ok(Vec::new());
        };

        let Some(cart) = self.carts.find_by_member(member.id()).await? else {
            return Ok(Vec::new());
        };

        let details = self.reader.list_details(cart.id()).await?;
        tracing::debug!(cart_id = %cart.id(), lines = details.len(), "Listed cart");
        Ok(details)
    }
}
