//! HTTP adapter for the shopping cart.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddCartItemRequest, CartItemCommandResponse, CartItemResponse, CartListResponse,
    ErrorResponse, UpdateCountQuery, ITEM_ID_INVALID_MESSAGE, ITEM_ID_REQUIRED_MESSAGE,
    MAX_QUANTITY_MESSAGE,
};
pub use handlers::CartHandlers;
pub use routes::cart_routes;
