//! HTTP routes for cart endpoints.

use axum::{
    routing::{patch, post},
    Router,
};

use super::handlers::{
    add_cart_item, delete_cart_item, get_cart_list, update_cart_item_count, CartHandlers,
};

/// Creates the cart router with all endpoints.
///
/// Expects `auth_middleware` to be layered on top.
pub fn cart_routes(handlers: CartHandlers) -> Router {
    Router::new()
        .route("/cart", post(add_cart_item).get(get_cart_list))
        .route(
            "/cartItem/:id",
            patch(update_cart_item_count).delete(delete_cart_item),
        )
        .with_state(handlers)
}
