//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations across ports. Command handlers (write)
//! and query handlers (read) are kept separate.

pub mod handlers;

pub use handlers::{
    AddCartItemCommand, AddCartItemHandler, AddCartItemResult, CheckCartItemOwnerHandler,
    CheckCartItemOwnerQuery, DeleteCartItemCommand, DeleteCartItemHandler, GetCartListHandler,
    GetCartListQuery, UpdateCartItemCountCommand, UpdateCartItemCountHandler,
};
