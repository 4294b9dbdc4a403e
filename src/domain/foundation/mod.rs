//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the cart domain.

mod auth;
mod errors;
mod ids;
mod quantity;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CartId, CartItemId, ItemId, MemberId, UserId};
pub use quantity::Quantity;
pub use timestamp::Timestamp;
