//! HTTP adapters - REST API implementations.
//!
//! - `cart` - Cart endpoints
//! - `middleware` - Bearer token authentication

pub mod cart;
pub mod middleware;

use axum::{middleware as axum_middleware, Router};

pub use cart::{cart_routes, CartHandlers};
pub use middleware::{auth_middleware, AuthState, RequireAuth};

/// Cart API with authentication applied.
pub fn api_router(handlers: CartHandlers, auth: AuthState) -> Router {
    cart_routes(handlers).layer(axum_middleware::from_fn_with_state(auth, auth_middleware))
}
