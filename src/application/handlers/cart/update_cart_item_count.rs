//! UpdateCartItemCountHandler - Command handler for overwriting a line's quantity.

use std::sync::Arc;

use crate::domain::cart::CartError;
use crate::domain::foundation::{CartItemId, Quantity};
use crate::ports::CartItemRepository;

/// Command to set a line's quantity.
///
/// Callers check ownership first; `Quantity` already rules out counts below one.
#[derive(Debug, Clone)]
pub struct UpdateCartItemCountCommand {
    pub cart_item_id: CartItemId,
    pub count: Quantity,
}

/// Handler for quantity updates.
pub struct UpdateCartItemCountHandler {
    lines: Arc<dyn CartItemRepository>,
}

impl UpdateCartItemCountHandler {
    pub fn new(lines: Arc<dyn CartItemRepository>) -> Self {
        Self { lines }
    }

    pub async fn handle(&self, cmd: UpdateCartItemCountCommand) -> Result<CartItemId, CartError> {
        let mut line = self
            .lines
            .find_by_id(&cmd.cart_item_id)
            .await?
            .ok_or_else(|| CartError::cart_item_not_found(cmd.cart_item_id))?;

        line.update_count(cmd.count);
        self.lines.update(&line).await?;

        tracing::debug!(cart_item_id = %cmd.cart_item_id, count = %cmd.count, "Updated cart item count");
        Ok(cmd.cart_item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::cart::test_support::{qty, FailingStore, Shop};

    #[tokio::test]
    async fn overwrites_count() {
        let shop = Shop::new();
        let line = shop.seed_line(shop.alice, shop.apple, 5).await;
        let handler = UpdateCartItemCountHandler::new(shop.store.clone());

        let id = handler
            .handle(UpdateCartItemCountCommand {
                cart_item_id: *line.id(),
                count: qty(1),
            })
            .await
            .unwrap();

        assert_eq!(id, *line.id());
        assert_eq!(shop.line(line.id()).await.unwrap().count().value(), 1);
    }

    #[tokio::test]
    async fn missing_line_is_not_found() {
        let shop = Shop::new();
        let handler = UpdateCartItemCountHandler::new(shop.store.clone());
        let missing = CartItemId::new();

        let result = handler
            .handle(UpdateCartItemCountCommand {
                cart_item_id: missing,
                count: qty(2),
            })
            .await;

        assert_eq!(result, Err(CartError::CartItemNotFound(missing)));
    }

    #[tokio::test]
    async fn storage_failure_maps_to_infrastructure() {
        let handler = UpdateCartItemCountHandler::new(Arc::new(FailingStore));

        let result = handler
            .handle(UpdateCartItemCountCommand {
                cart_item_id: CartItemId::new(),
                count: qty(2),
            })
            .await;

        assert!(matches!(result, Err(CartError::Infrastructure(_))));
    }
}
