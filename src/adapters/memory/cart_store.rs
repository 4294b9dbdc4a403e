//! In-memory cart and cart line store.
//!
//! All writes happen under one mutex, which gives the same guarantees the
//! PostgreSQL adapter gets from its transaction and unique constraints: one
//! cart per member, one line per (cart, item), and adds that never lose an
//! increment.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::cart::{Cart, CartItem};
use crate::domain::foundation::{CartId, CartItemId, DomainError, ItemId, MemberId, Quantity};
use crate::ports::{
    AddedLine, CartDetail, CartItemRepository, CartReader, CartRepository, ItemReader,
};

#[derive(Debug, Default)]
struct CartState {
    carts: Vec<Cart>,
    /// Kept in insertion order.
    lines: Vec<CartItem>,
}

/// In-memory implementation of the cart ports.
pub struct InMemoryCartStore {
    state: Mutex<CartState>,
    items: Arc<dyn ItemReader>,
}

impl InMemoryCartStore {
    /// Creates an empty store. `items` supplies display data for listings.
    pub fn new(items: Arc<dyn ItemReader>) -> Self {
        Self {
            state: Mutex::new(CartState::default()),
            items,
        }
    }

    /// Returns the number of carts.
    pub async fn cart_count(&self) -> usize {
        self.state.lock().await.carts.len()
    }

    /// Returns the number of lines across all carts.
    pub async fn line_count(&self) -> usize {
        self.state.lock().await.lines.len()
    }
}

#[async_trait]
impl CartRepository for InMemoryCartStore {
    async fn find_by_id(&self, id: &CartId) -> Result<Option<Cart>, DomainError> {
        let state = self.state.lock().await;
        Ok(state.carts.iter().find(|c| c.id() == id).cloned())
    }

    async fn find_by_member(&self, member_id: &MemberId) -> Result<Option<Cart>, DomainError> {
        let state = self.state.lock().await;
        Ok(state
            .carts
            .iter()
            .find(|c| c.member_id() == member_id)
            .cloned())
    }
}

#[async_trait]
impl CartItemRepository for InMemoryCartStore {
    async fn find_by_id(&self, id: &CartItemId) -> Result<Option<CartItem>, DomainError> {
        let state = self.state.lock().await;
        Ok(state.lines.iter().find(|l| l.id() == id).cloned())
    }

    async fn add_to_member_cart(
        &self,
        member_id: &MemberId,
        item_id: &ItemId,
        count: Quantity,
    ) -> Result<AddedLine, DomainError> {
        let mut state = self.state.lock().await;

        let cart_id = match state.carts.iter().find(|c| c.member_id() == member_id) {
            Some(cart) => *cart.id(),
            None => {
                let cart = Cart::new(*member_id);
                let id = *cart.id();
                state.carts.push(cart);
                id
            }
        };

        if let Some(existing) = state
            .lines
            .iter_mut()
            .find(|l| l.cart_id() == &cart_id && l.item_id() == item_id)
        {
            existing.add_count(count);
            return Ok(AddedLine {
                line: existing.clone(),
                created: false,
            });
        }

        let line = CartItem::new(cart_id, *item_id, count);
        state.lines.push(line.clone());
        Ok(AddedLine {
            line,
            created: true,
        })
    }

    async fn update(&self, line: &CartItem) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        match state.lines.iter_mut().find(|l| l.id() == line.id()) {
            Some(existing) => {
                *existing = line.clone();
                Ok(())
            }
            None => Err(DomainError::cart_item_not_found(line.id())),
        }
    }

    async fn delete(&self, id: &CartItemId) -> Result<(), DomainError> {
        let mut state = self.state.lock().await;
        let before = state.lines.len();
        state.lines.retain(|l| l.id() != id);
        if state.lines.len() == before {
            return Err(DomainError::cart_item_not_found(id));
        }
        Ok(())
    }
}

#[async_trait]
impl CartReader for InMemoryCartStore {
    async fn list_details(&self, cart_id: &CartId) -> Result<Vec<CartDetail>, DomainError> {
        let lines: Vec<CartItem> = {
            let state = self.state.lock().await;
            state
                .lines
                .iter()
                .filter(|l| l.cart_id() == cart_id)
                .cloned()
                .collect()
        };

        let mut details = Vec::with_capacity(lines.len());
        for line in lines {
            // Lines whose item left the catalog drop out, like an inner join.
            let Some(item) = self.items.find_by_id(line.item_id()).await? else {
                continue;
            };
            details.push(CartDetail {
                cart_item_id: *line.id(),
                item_id: *line.item_id(),
                item_name: item.name().to_string(),
                price: item.price(),
                count: line.count().value(),
                image_url: item.image_url().map(str::to_string),
                added_at: *line.created_at(),
            });
        }
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalog;
    use crate::domain::catalog::Item;
    use crate::domain::foundation::ErrorCode;

    fn qty(n: i64) -> Quantity {
        Quantity::try_new(n).unwrap()
    }

    fn store_with(items: Vec<Item>) -> InMemoryCartStore {
        let catalog = items
            .into_iter()
            .fold(InMemoryCatalog::new(), |c, item| c.with_item(item));
        InMemoryCartStore::new(Arc::new(catalog))
    }

    #[tokio::test]
    async fn first_add_creates_cart_and_line() {
        let store = store_with(vec![]);
        let member_id = MemberId::new();

        let added = store
            .add_to_member_cart(&member_id, &ItemId::new(), qty(2))
            .await
            .unwrap();

        assert!(added.created);
        assert_eq!(added.line.count().value(), 2);
        let cart = store.find_by_member(&member_id).await.unwrap().unwrap();
        assert_eq!(added.line.cart_id(), cart.id());
    }

    #[tokio::test]
    async fn repeat_add_merges_into_one_line() {
        let store = store_with(vec![]);
        let member_id = MemberId::new();
        let item_id = ItemId::new();

        let first = store.add_to_member_cart(&member_id, &item_id, qty(2)).await.unwrap();
        let merged = store.add_to_member_cart(&member_id, &item_id, qty(3)).await.unwrap();

        assert!(!merged.created);
        assert_eq!(first.line.id(), merged.line.id());
        assert_eq!(merged.line.count().value(), 5);
        assert_eq!(store.cart_count().await, 1);
        assert_eq!(store.line_count().await, 1);
    }

    #[tokio::test]
    async fn merge_caps_at_maximum() {
        let store = store_with(vec![]);
        let member_id = MemberId::new();
        let item_id = ItemId::new();

        store
            .add_to_member_cart(&member_id, &item_id, qty(i64::from(Quantity::MAX)))
            .await
            .unwrap();
        let merged = store.add_to_member_cart(&member_id, &item_id, qty(5)).await.unwrap();

        assert_eq!(merged.line.count().value(), Quantity::MAX);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_adds_keep_every_increment() {
        let store = Arc::new(store_with(vec![]));
        let member_id = MemberId::new();
        let item_id = ItemId::new();

        let tasks: Vec<_> = (1..=20)
            .map(|n| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.add_to_member_cart(&member_id, &item_id, qty(n)).await
                })
            })
            .collect();
        let mut line_ids = Vec::new();
        for task in tasks {
            line_ids.push(*task.await.unwrap().unwrap().line.id());
        }

        line_ids.dedup();
        assert_eq!(line_ids.len(), 1);
        assert_eq!(store.cart_count().await, 1);
        let line = CartItemRepository::find_by_id(store.as_ref(), &line_ids[0])
            .await
            .unwrap()
            .unwrap();
        assert_eq!(line.count().value(), (1..=20).sum::<u32>());
    }

    #[tokio::test]
    async fn update_missing_line_fails() {
        let store = store_with(vec![]);
        let line = CartItem::new(CartId::new(), ItemId::new(), qty(1));

        let err = store.update(&line).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::CartItemNotFound);
        assert_eq!(err.details.get("cart_item_id"), Some(&line.id().to_string()));
    }

    #[tokio::test]
    async fn delete_removes_line() {
        let store = store_with(vec![]);
        let added = store
            .add_to_member_cart(&MemberId::new(), &ItemId::new(), qty(1))
            .await
            .unwrap();

        store.delete(added.line.id()).await.unwrap();
        assert_eq!(store.line_count().await, 0);
        assert!(store.delete(added.line.id()).await.is_err());
    }

    #[tokio::test]
    async fn list_details_joins_item_data_in_insertion_order() {
        let mug = Item::new(ItemId::new(), "Mug", 1_200, Some("/mug.png".into())).unwrap();
        let pen = Item::new(ItemId::new(), "Pen", 300, None).unwrap();
        let store = store_with(vec![mug.clone(), pen.clone()]);
        let member_id = MemberId::new();

        store.add_to_member_cart(&member_id, pen.id(), qty(1)).await.unwrap();
        let added = store.add_to_member_cart(&member_id, mug.id(), qty(2)).await.unwrap();
        store
            .add_to_member_cart(&MemberId::new(), mug.id(), qty(9))
            .await
            .unwrap();

        let details = store.list_details(added.line.cart_id()).await.unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].item_name, "Pen");
        assert_eq!(details[1].item_name, "Mug");
        assert_eq!(details[1].count, 2);
        assert_eq!(details[1].image_url.as_deref(), Some("/mug.png"));
    }
}
