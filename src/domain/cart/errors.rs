//! Cart-specific error types.

use std::str::FromStr;

use crate::domain::foundation::{CartId, CartItemId, DomainError, ErrorCode, ItemId};

/// Shown when a quantity below one is requested.
pub const MIN_QUANTITY_MESSAGE: &str = "Please add at least 1 item.";

/// Shown when a member touches a line in somebody else's cart.
pub const NOT_OWNER_MESSAGE: &str = "You do not have permission to modify this cart item.";

/// Cart-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Catalog item does not exist.
    ItemNotFound(ItemId),
    /// No member is registered under the email.
    MemberNotFound(String),
    /// Cart does not exist.
    CartNotFound(CartId),
    /// Cart line does not exist.
    CartItemNotFound(CartItemId),
    /// Requester does not own the cart.
    Forbidden,
    /// Requested quantity is below one.
    InvalidQuantity,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl CartError {
    pub fn item_not_found(id: ItemId) -> Self {
        CartError::ItemNotFound(id)
    }
    pub fn member_not_found(email: impl Into<String>) -> Self {
        CartError::MemberNotFound(email.into())
    }
    pub fn cart_not_found(id: CartId) -> Self {
        CartError::CartNotFound(id)
    }
    pub fn cart_item_not_found(id: CartItemId) -> Self {
        CartError::CartItemNotFound(id)
    }
    pub fn forbidden() -> Self {
        CartError::Forbidden
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        CartError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            CartError::ItemNotFound(_) => ErrorCode::ItemNotFound,
            CartError::MemberNotFound(_) => ErrorCode::MemberNotFound,
            CartError::CartNotFound(_) => ErrorCode::CartNotFound,
            CartError::CartItemNotFound(_) => ErrorCode::CartItemNotFound,
            CartError::Forbidden => ErrorCode::Forbidden,
            CartError::InvalidQuantity => ErrorCode::OutOfRange,
            CartError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            CartError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            CartError::ItemNotFound(id) => format!("Item not found: {}", id),
            CartError::MemberNotFound(email) => format!("Member not found: {}", email),
            CartError::CartNotFound(id) => format!("Cart not found: {}", id),
            CartError::CartItemNotFound(id) => format!("Cart item not found: {}", id),
            CartError::Forbidden => NOT_OWNER_MESSAGE.to_string(),
            CartError::InvalidQuantity => MIN_QUANTITY_MESSAGE.to_string(),
            CartError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            CartError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CartError {}

impl From<DomainError> for CartError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ItemNotFound => not_found(err, "item_id", CartError::ItemNotFound),
            ErrorCode::MemberNotFound => not_found(err, "email", CartError::MemberNotFound),
            ErrorCode::CartNotFound => not_found(err, "cart_id", CartError::CartNotFound),
            ErrorCode::CartItemNotFound => {
                not_found(err, "cart_item_id", CartError::CartItemNotFound)
            }
            ErrorCode::Forbidden | ErrorCode::Unauthorized => CartError::Forbidden,
            ErrorCode::OutOfRange => CartError::InvalidQuantity,
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                CartError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            ErrorCode::DatabaseError | ErrorCode::InternalError => {
                CartError::Infrastructure(err.message)
            }
        }
    }
}

/// Rebuilds a typed not-found variant from the id an adapter put in
/// `details[key]`. An error without a usable id is an adapter bug and
/// surfaces as infrastructure.
fn not_found<T: FromStr>(
    err: DomainError,
    key: &str,
    variant: impl FnOnce(T) -> CartError,
) -> CartError {
    match err.details.get(key).and_then(|raw| raw.parse().ok()) {
        Some(id) => variant(id),
        None => CartError::Infrastructure(err.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_uses_fixed_message() {
        assert_eq!(CartError::forbidden().message(), NOT_OWNER_MESSAGE);
    }

    #[test]
    fn invalid_quantity_uses_fixed_message() {
        assert_eq!(CartError::InvalidQuantity.to_string(), MIN_QUANTITY_MESSAGE);
    }

    #[test]
    fn domain_forbidden_maps_to_forbidden() {
        let err = DomainError::new(ErrorCode::Forbidden, "nope");
        assert_eq!(CartError::from(err), CartError::Forbidden);
    }

    #[test]
    fn domain_cart_item_not_found_maps_to_typed_variant() {
        let id = CartItemId::new();
        let err = DomainError::cart_item_not_found(&id);

        let mapped = CartError::from(err);

        assert_eq!(mapped, CartError::CartItemNotFound(id));
        assert_eq!(mapped.message(), format!("Cart item not found: {}", id));
    }

    #[test]
    fn domain_item_not_found_maps_to_typed_variant() {
        let id = ItemId::new();
        let err = DomainError::new(ErrorCode::ItemNotFound, "gone").with_detail("item_id", id.to_string());
        assert_eq!(CartError::from(err), CartError::ItemNotFound(id));
    }

    #[test]
    fn domain_not_found_without_id_is_infrastructure() {
        let err = DomainError::new(ErrorCode::CartItemNotFound, "Cart item not found");
        assert_eq!(
            CartError::from(err),
            CartError::Infrastructure("Cart item not found".to_string())
        );
    }

    #[test]
    fn domain_database_error_maps_to_infrastructure() {
        let err = DomainError::database("Failed to insert cart", "timeout");
        assert!(matches!(CartError::from(err), CartError::Infrastructure(_)));
    }

    #[test]
    fn domain_validation_error_keeps_field() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "bad").with_detail("field", "count");
        assert_eq!(
            CartError::from(err),
            CartError::ValidationFailed {
                field: "count".to_string(),
                message: "bad".to_string()
            }
        );
    }
}
