//! Cart aggregate root.
//!
//! A cart belongs to exactly one member and is created the first time that
//! member adds an item. Lines live in their own repository and reference the
//! cart by id.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CartId, MemberId, Timestamp};

/// A member's shopping cart.
///
/// # Invariants
///
/// - At most one cart exists per member
/// - `member_id` never changes after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    id: CartId,
    member_id: MemberId,
    created_at: Timestamp,
}

impl Cart {
    /// Create an empty cart for a member.
    pub fn new(member_id: MemberId) -> Self {
        Self {
            id: CartId::new(),
            member_id,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute a cart from persistence.
    pub fn reconstitute(id: CartId, member_id: MemberId, created_at: Timestamp) -> Self {
        Self {
            id,
            member_id,
            created_at,
        }
    }

    pub fn id(&self) -> &CartId {
        &self.id
    }

    pub fn member_id(&self) -> &MemberId {
        &self.member_id
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Checks if the given member owns this cart.
    pub fn is_owned_by(&self, member_id: &MemberId) -> bool {
        &self.member_id == member_id
    }
}
