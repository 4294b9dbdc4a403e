//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod cart;

pub use cart::{
    AddCartItemCommand, AddCartItemHandler, AddCartItemResult, CheckCartItemOwnerHandler,
    CheckCartItemOwnerQuery, DeleteCartItemCommand, DeleteCartItemHandler, GetCartListHandler,
    GetCartListQuery, UpdateCartItemCountCommand, UpdateCartItemCountHandler,
};
