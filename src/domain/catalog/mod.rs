//! Catalog domain module.
//!
//! Read-only from the cart's perspective: items are looked up by id and
//! their display data is joined into cart listings.

mod item;

pub use item::Item;
