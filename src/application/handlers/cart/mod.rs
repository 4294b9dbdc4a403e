//! Cart command and query handlers.

mod add_cart_item;
mod check_cart_item_owner;
mod delete_cart_item;
mod get_cart_list;
mod update_cart_item_count;

#[cfg(test)]
mod test_support;

pub use add_cart_item::{AddCartItemCommand, AddCartItemHandler, AddCartItemResult};
pub use check_cart_item_owner::{CheckCartItemOwnerHandler, CheckCartItemOwnerQuery};
pub use delete_cart_item::{DeleteCartItemCommand, DeleteCartItemHandler};
pub use get_cart_list::{GetCartListHandler, GetCartListQuery};
pub use update_cart_item_count::{UpdateCartItemCountCommand, UpdateCartItemCountHandler};
