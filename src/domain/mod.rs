//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors, auth)
//! - `catalog` - Purchasable items (read-only here)
//! - `member` - Registered shoppers
//! - `cart` - Carts, cart lines and cart errors

pub mod cart;
pub mod catalog;
pub mod foundation;
pub mod member;
