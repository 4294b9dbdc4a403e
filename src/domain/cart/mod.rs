//! Cart domain module.
//!
//! One cart per member, created lazily on the first add. Each cart holds
//! lines pairing a catalog item with a quantity; adding an item that is
//! already present grows the existing line instead of creating another.

mod cart;
mod cart_item;
mod errors;

pub use cart::Cart;
pub use cart_item::CartItem;
pub use errors::{CartError, MIN_QUANTITY_MESSAGE, NOT_OWNER_MESSAGE};
