//! AddCartItemHandler - Command handler for putting an item in a member's cart.

use std::sync::Arc;

use crate::domain::cart::CartError;
use crate::domain::foundation::{CartItemId, ItemId, Quantity};
use crate::ports::{CartItemRepository, ItemReader, MemberReader};

/// Command to add `count` of an item to the requester's cart.
#[derive(Debug, Clone)]
pub struct AddCartItemCommand {
    pub item_id: ItemId,
    pub count: Quantity,
    pub requester_email: String,
}

/// Result of a successful add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCartItemResult {
    pub cart_item_id: CartItemId,
    /// Line quantity after the add.
    pub count: Quantity,
    /// False when the item was already in the cart and its line grew.
    pub created: bool,
}

/// Handler for adding items to carts.
///
/// Creates the member's cart on first use. A repeat add of the same item
/// increments the existing line. Cart creation and the line write are one
/// atomic step in the repository.
pub struct AddCartItemHandler {
    items: Arc<dyn ItemReader>,
    members: Arc<dyn MemberReader>,
    lines: Arc<dyn CartItemRepository>,
}

impl AddCartItemHandler {
    pub fn new(
        items: Arc<dyn ItemReader>,
        members: Arc<dyn MemberReader>,
        lines: Arc<dyn CartItemRepository>,
    ) -> Self {
        Self {
            items,
            members,
            lines,
        }
    }

    pub async fn handle(&self, cmd: AddCartItemCommand) -> Result<AddCartItemResult, CartError> {
        // 1. Resolve item and member
        let item = self
            .items
            .find_by_id(&cmd.item_id)
            .await?
            .ok_or_else(|| CartError::item_not_found(cmd.item_id))?;

        let member = self
            .members
            .find_by_email(&cmd.requester_email)
            .await?
            .ok_or_else(|| CartError::member_not_found(&cmd.requester_email))?;

        // 2. Create-or-grow the line in the member's cart
        let added = self
            .lines
            .add_to_member_cart(member.id(), item.id(), cmd.count)
            .await?;

        tracing::debug!(
            cart_item_id = %added.line.id(),
            member_id = %member.id(),
            count = %added.line.count(),
            created = added.created,
            "Added item to cart"
        );

        Ok(AddCartItemResult {
            cart_item_id: *added.line.id(),
            count: added.line.count(),
            created: added.created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalog;
    use crate::application::handlers::cart::test_support::{qty, FailingStore, Shop, ALICE, BOB};
    use crate::domain::catalog::Item;
    use crate::domain::foundation::DomainError;
    use async_trait::async_trait;

    fn handler(shop: &Shop) -> AddCartItemHandler {
        AddCartItemHandler::new(shop.catalog.clone(), shop.catalog.clone(), shop.store.clone())
    }

    fn cmd(item_id: ItemId, count: i64, email: &str) -> AddCartItemCommand {
        AddCartItemCommand {
            item_id,
            count: qty(count),
            requester_email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn first_add_creates_cart_and_line() {
        let shop = Shop::new();

        let result = handler(&shop).handle(cmd(shop.apple, 2, ALICE)).await.unwrap();

        assert!(result.created);
        assert_eq!(result.count.value(), 2);
        assert_eq!(shop.store.cart_count().await, 1);
        assert_eq!(shop.store.line_count().await, 1);
    }

    #[tokio::test]
    async fn repeat_add_increments_existing_line() {
        let shop = Shop::new();
        let handler = handler(&shop);

        let first = handler.handle(cmd(shop.apple, 2, ALICE)).await.unwrap();
        let second = handler.handle(cmd(shop.apple, 3, ALICE)).await.unwrap();

        assert_eq!(first.cart_item_id, second.cart_item_id);
        assert!(!second.created);
        assert_eq!(second.count.value(), 5);
        assert_eq!(shop.store.line_count().await, 1);
        assert_eq!(shop.line(&first.cart_item_id).await.unwrap().count().value(), 5);
    }

    #[tokio::test]
    async fn different_items_get_separate_lines_in_one_cart() {
        let shop = Shop::new();
        let handler = handler(&shop);

        let apple = handler.handle(cmd(shop.apple, 1, ALICE)).await.unwrap();
        let pear = handler.handle(cmd(shop.pear, 1, ALICE)).await.unwrap();

        assert_ne!(apple.cart_item_id, pear.cart_item_id);
        assert_eq!(shop.store.cart_count().await, 1);
        assert_eq!(shop.store.line_count().await, 2);
    }

    #[tokio::test]
    async fn members_get_their_own_carts() {
        let shop = Shop::new();
        let handler = handler(&shop);

        let a = handler.handle(cmd(shop.apple, 1, ALICE)).await.unwrap();
        let b = handler.handle(cmd(shop.apple, 1, BOB)).await.unwrap();

        assert_ne!(a.cart_item_id, b.cart_item_id);
        assert_eq!(shop.store.cart_count().await, 2);
    }

    #[tokio::test]
    async fn unknown_item_fails_without_creating_cart() {
        let shop = Shop::new();
        let missing = ItemId::new();

        let result = handler(&shop).handle(cmd(missing, 1, ALICE)).await;

        assert_eq!(result, Err(CartError::ItemNotFound(missing)));
        assert_eq!(shop.store.cart_count().await, 0);
    }

    #[tokio::test]
    async fn unknown_member_fails() {
        let shop = Shop::new();

        let result = handler(&shop)
            .handle(cmd(shop.apple, 1, "nobody@example.com"))
            .await;

        assert!(matches!(result, Err(CartError::MemberNotFound(email)) if email == "nobody@example.com"));
        assert_eq!(shop.store.cart_count().await, 0);
    }

    #[tokio::test]
    async fn storage_failure_maps_to_infrastructure_and_leaves_no_cart() {
        let shop = Shop::new();
        let handler =
            AddCartItemHandler::new(shop.catalog.clone(), shop.catalog.clone(), Arc::new(FailingStore));

        let result = handler.handle(cmd(shop.apple, 1, ALICE)).await;

        assert!(matches!(result, Err(CartError::Infrastructure(_))));
        assert_eq!(shop.store.cart_count().await, 0);
        assert_eq!(shop.store.line_count().await, 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_repeat_adds_keep_every_increment() {
        let shop = Shop::new();
        let seeded = shop.seed_line(shop.alice, shop.apple, 1).await;
        let handler = Arc::new(AddCartItemHandler::new(
            Arc::new(YieldingItems(shop.catalog.clone())),
            shop.catalog.clone(),
            shop.store.clone(),
        ));

        let tasks: Vec<_> = [2, 3, 4, 5]
            .into_iter()
            .map(|n| {
                let handler = handler.clone();
                let apple = shop.apple;
                tokio::spawn(async move { handler.handle(cmd(apple, n, ALICE)).await })
            })
            .collect();
        for task in tasks {
            let result = task.await.unwrap().unwrap();
            assert_eq!(result.cart_item_id, *seeded.id());
            assert!(!result.created);
        }

        assert_eq!(shop.line(seeded.id()).await.unwrap().count().value(), 1 + 2 + 3 + 4 + 5);
        assert_eq!(shop.store.cart_count().await, 1);
        assert_eq!(shop.store.line_count().await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_first_adds_share_one_cart_and_line() {
        let shop = Shop::new();
        let handler = Arc::new(AddCartItemHandler::new(
            Arc::new(YieldingItems(shop.catalog.clone())),
            shop.catalog.clone(),
            shop.store.clone(),
        ));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let handler = handler.clone();
                let pear = shop.pear;
                tokio::spawn(async move { handler.handle(cmd(pear, 1, BOB)).await })
            })
            .collect();
        let mut created = 0;
        for task in tasks {
            if task.await.unwrap().unwrap().created {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(shop.store.cart_count().await, 1);
        assert_eq!(shop.store.line_count().await, 1);
    }

    /// Yields before every lookup so concurrent adds interleave.
    struct YieldingItems(Arc<InMemoryCatalog>);

    #[async_trait]
    impl ItemReader for YieldingItems {
        async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
            tokio::task::yield_now().await;
            ItemReader::find_by_id(self.0.as_ref(), id).await
        }
    }
}
