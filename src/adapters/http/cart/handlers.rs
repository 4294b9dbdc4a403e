//! HTTP handlers for cart endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::cart::{
    AddCartItemCommand, AddCartItemHandler, CheckCartItemOwnerHandler, CheckCartItemOwnerQuery,
    DeleteCartItemCommand, DeleteCartItemHandler, GetCartListHandler, GetCartListQuery,
    UpdateCartItemCountCommand, UpdateCartItemCountHandler,
};
use crate::domain::cart::{CartError, NOT_OWNER_MESSAGE};
use crate::domain::foundation::CartItemId;
use crate::ports::{CartItemRepository, CartReader, CartRepository, ItemReader, MemberReader};

use super::dto::{
    AddCartItemRequest, CartItemCommandResponse, CartListResponse, ErrorResponse,
    UpdateCountQuery,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CartHandlers {
    add_handler: Arc<AddCartItemHandler>,
    list_handler: Arc<GetCartListHandler>,
    owner_handler: Arc<CheckCartItemOwnerHandler>,
    update_handler: Arc<UpdateCartItemCountHandler>,
    delete_handler: Arc<DeleteCartItemHandler>,
}

impl CartHandlers {
    pub fn new(
        add_handler: Arc<AddCartItemHandler>,
        list_handler: Arc<GetCartListHandler>,
        owner_handler: Arc<CheckCartItemOwnerHandler>,
        update_handler: Arc<UpdateCartItemCountHandler>,
        delete_handler: Arc<DeleteCartItemHandler>,
    ) -> Self {
        Self {
            add_handler,
            list_handler,
            owner_handler,
            update_handler,
            delete_handler,
        }
    }

    /// Builds every cart handler over one set of ports.
    pub fn from_ports(
        items: Arc<dyn ItemReader>,
        members: Arc<dyn MemberReader>,
        carts: Arc<dyn CartRepository>,
        lines: Arc<dyn CartItemRepository>,
        reader: Arc<dyn CartReader>,
    ) -> Self {
        Self::new(
            Arc::new(AddCartItemHandler::new(items, members.clone(), lines.clone())),
            Arc::new(GetCartListHandler::new(
                members.clone(),
                carts.clone(),
                reader,
            )),
            Arc::new(CheckCartItemOwnerHandler::new(lines.clone(), carts, members)),
            Arc::new(UpdateCartItemCountHandler::new(lines.clone())),
            Arc::new(DeleteCartItemHandler::new(lines)),
        )
    }

    /// Ownership gate shared by PATCH and DELETE.
    async fn authorize(&self, cart_item_id: CartItemId, email: String) -> Result<(), Response> {
        let query = CheckCartItemOwnerQuery {
            cart_item_id,
            requester_email: email,
        };
        match self.owner_handler.handle(query).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(handle_cart_error(CartError::forbidden())),
            Err(e) => Err(handle_cart_error(e)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /cart - Add an item to the requester's cart
pub async fn add_cart_item(
    State(handlers): State<CartHandlers>,
    RequireAuth(user): RequireAuth,
    body: Result<Json<AddCartItemRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection.body_text()),
    };

    let (item_id, count) = match req.validate() {
        Ok(valid) => valid,
        Err(messages) => return bad_request(messages.join(" ")),
    };

    let cmd = AddCartItemCommand {
        item_id,
        count,
        requester_email: user.email,
    };

    match handlers.add_handler.handle(cmd).await {
        Ok(result) => {
            let response = CartItemCommandResponse::from(result.cart_item_id);
            (StatusCode::OK, Json(response)).into_response()
        }
        // Every workflow failure on add is the client's to fix.
        Err(CartError::Infrastructure(msg)) => {
            tracing::error!("Add to cart failed: {}", msg);
            bad_request("Could not add the item to your cart.")
        }
        Err(e) => bad_request(e.message()),
    }
}

/// GET /cart - List the requester's cart
pub async fn get_cart_list(
    State(handlers): State<CartHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = GetCartListQuery {
        requester_email: user.email,
    };

    match handlers.list_handler.handle(query).await {
        Ok(details) => {
            let response = CartListResponse::from(details);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_cart_error(e),
    }
}

/// PATCH /cartItem/:id?count=N - Overwrite a line's quantity
pub async fn update_cart_item_count(
    State(handlers): State<CartHandlers>,
    RequireAuth(user): RequireAuth,
    Path(cart_item_id): Path<String>,
    Query(query): Query<UpdateCountQuery>,
) -> Response {
    let cart_item_id = match parse_cart_item_id(&cart_item_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    // Count is checked before ownership.
    let count = match query.quantity() {
        Ok(count) => count,
        Err(message) => return bad_request(message),
    };

    if let Err(response) = handlers.authorize(cart_item_id, user.email).await {
        return response;
    }

    let cmd = UpdateCartItemCountCommand {
        cart_item_id,
        count,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(id) => (StatusCode::OK, Json(CartItemCommandResponse::from(id))).into_response(),
        Err(e) => handle_cart_error(e),
    }
}

/// DELETE /cartItem/:id - Remove a line
pub async fn delete_cart_item(
    State(handlers): State<CartHandlers>,
    RequireAuth(user): RequireAuth,
    Path(cart_item_id): Path<String>,
) -> Response {
    let cart_item_id = match parse_cart_item_id(&cart_item_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    if let Err(response) = handlers.authorize(cart_item_id, user.email).await {
        return response;
    }

    match handlers
        .delete_handler
        .handle(DeleteCartItemCommand { cart_item_id })
        .await
    {
        Ok(id) => (StatusCode::OK, Json(CartItemCommandResponse::from(id))).into_response(),
        Err(e) => handle_cart_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn parse_cart_item_id(raw: &str) -> Result<CartItemId, Response> {
    raw.parse::<CartItemId>()
        .map_err(|_| bad_request("Invalid cart item ID"))
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(message)),
    )
        .into_response()
}

fn handle_cart_error(error: CartError) -> Response {
    match error {
        CartError::Forbidden => (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::forbidden(NOT_OWNER_MESSAGE)),
        )
            .into_response(),
        CartError::Infrastructure(msg) => {
            tracing::error!("Cart infrastructure error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("An internal error occurred")),
            )
                .into_response()
        }
        e @ (CartError::ItemNotFound(_)
        | CartError::MemberNotFound(_)
        | CartError::CartNotFound(_)
        | CartError::CartItemNotFound(_)) => {
            tracing::warn!("{}", e);
            bad_request(e.message())
        }
        e @ (CartError::InvalidQuantity | CartError::ValidationFailed { .. }) => {
            bad_request(e.message())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn forbidden_maps_to_403_with_fixed_message() {
        let response = handle_cart_error(CartError::forbidden());

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["message"], NOT_OWNER_MESSAGE);
    }

    #[tokio::test]
    async fn not_found_maps_to_400() {
        let response = handle_cart_error(CartError::cart_item_not_found(CartItemId::new()));

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn infrastructure_maps_to_500_without_leaking() {
        let response = handle_cart_error(CartError::infrastructure("password=hunter2"));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert!(!json["message"].as_str().unwrap().contains("hunter2"));
    }

    #[test]
    fn malformed_id_is_bad_request() {
        let response = parse_cart_item_id("42").unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
