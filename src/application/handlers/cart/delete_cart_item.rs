//! DeleteCartItemHandler - Command handler for removing a line from a cart.

use std::sync::Arc;

use crate::domain::cart::CartError;
use crate::domain::foundation::CartItemId;
use crate::ports::CartItemRepository;

/// Command to remove a line. Callers check ownership first.
#[derive(Debug, Clone)]
pub struct DeleteCartItemCommand {
    pub cart_item_id: CartItemId,
}

/// Handler for line removal. The cart itself stays.
pub struct DeleteCartItemHandler {
    lines: Arc<dyn CartItemRepository>,
}

impl DeleteCartItemHandler {
    pub fn new(lines: Arc<dyn CartItemRepository>) -> Self {
        Self { lines }
    }

    pub async fn handle(&self, cmd: DeleteCartItemCommand) -> Result<CartItemId, CartError> {
        if self.lines.find_by_id(&cmd.cart_item_id).await?.is_none() {
            tracing::warn!(cart_item_id = %cmd.cart_item_id, "Delete of missing cart item");
            return Err(CartError::cart_item_not_found(cmd.cart_item_id));
        }

        self.lines.delete(&cmd.cart_item_id).await?;

        tracing::debug!(cart_item_id = %cmd.cart_item_id, "Deleted cart item");
        Ok(cmd.cart_item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::cart::test_support::{FailingStore, Shop};

    #[tokio::test]
    async fn removes_line_and_keeps_siblings() {
        let shop = Shop::new();
        let apple = shop.seed_line(shop.alice, shop.apple, 1).await;
        let pear = shop.seed_line(shop.alice, shop.pear, 1).await;
        let handler = DeleteCartItemHandler::new(shop.store.clone());

        let id = handler
            .handle(DeleteCartItemCommand {
                cart_item_id: *apple.id(),
            })
            .await
            .unwrap();

        assert_eq!(id, *apple.id());
        assert!(shop.line(apple.id()).await.is_none());
        assert!(shop.line(pear.id()).await.is_some());
        assert_eq!(shop.store.cart_count().await, 1);
    }

    #[tokio::test]
    async fn missing_line_is_not_found() {
        let shop = Shop::new();
        let handler = DeleteCartItemHandler::new(shop.store.clone());
        let missing = CartItemId::new();

        let result = handler
            .handle(DeleteCartItemCommand {
                cart_item_id: missing,
            })
            .await;

        assert_eq!(result, Err(CartError::CartItemNotFound(missing)));
    }

    #[tokio::test]
    async fn storage_failure_maps_to_infrastructure() {
        let handler = DeleteCartItemHandler::new(Arc::new(FailingStore));

        let result = handler
            .handle(DeleteCartItemCommand {
                cart_item_id: CartItemId::new(),
            })
            .await;

        assert!(matches!(result, Err(CartError::Infrastructure(_))));
    }
}
