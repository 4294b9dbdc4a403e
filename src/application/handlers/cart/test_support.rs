//! Shared fixture for cart handler tests.

use std::sync::Arc;

use async_trait::async_trait;

use crate::adapters::memory::{InMemoryCartStore, InMemoryCatalog};
use crate::domain::cart::{Cart, CartItem};
use crate::domain::catalog::Item;
use crate::domain::foundation::{
    CartId, CartItemId, DomainError, ErrorCode, ItemId, MemberId, Quantity,
};
use crate::domain::member::Member;
use crate::ports::{AddedLine, CartDetail, CartItemRepository, CartReader, CartRepository};

pub const ALICE: &str = "alice@example.com";
pub const BOB: &str = "bob@example.com";

/// Two members, two items, empty carts.
pub struct Shop {
    pub catalog: Arc<InMemoryCatalog>,
    pub store: Arc<InMemoryCartStore>,
    pub alice: MemberId,
    pub bob: MemberId,
    pub apple: ItemId,
    pub pear: ItemId,
}

impl Shop {
    pub fn new() -> Self {
        let alice = MemberId::new();
        let bob = MemberId::new();
        let apple = ItemId::new();
        let pear = ItemId::new();

        let catalog = InMemoryCatalog::new()
            .with_member(Member::new(alice, ALICE, "Alice").unwrap())
            .with_member(Member::new(bob, BOB, "Bob").unwrap())
            .with_item(Item::new(apple, "Apple", 120, Some("/img/apple.png".to_string())).unwrap())
            .with_item(Item::new(pear, "Pear", 95, None).unwrap());
        let catalog = Arc::new(catalog);
        let store = Arc::new(InMemoryCartStore::new(catalog.clone()));

        Self {
            catalog,
            store,
            alice,
            bob,
            apple,
            pear,
        }
    }

    /// Puts `count` of `item` into `member`'s cart directly through the store.
    pub async fn seed_line(&self, member: MemberId, item: ItemId, count: i64) -> CartItem {
        self.store
            .add_to_member_cart(&member, &item, qty(count))
            .await
            .unwrap()
            .line
    }

    pub async fn line(&self, id: &CartItemId) -> Option<CartItem> {
        CartItemRepository::find_by_id(self.store.as_ref(), id)
            .await
            .unwrap()
    }
}

pub fn qty(n: i64) -> Quantity {
    Quantity::try_new(n).unwrap()
}

/// Every operation fails with a database error.
pub struct FailingStore;

fn db_down() -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, "connection refused")
}

#[async_trait]
impl CartRepository for FailingStore {
    async fn find_by_id(&self, _id: &CartId) -> Result<Option<Cart>, DomainError> {
        Err(db_down())
    }
    async fn find_by_member(&self, _member_id: &MemberId) -> Result<Option<Cart>, DomainError> {
        Err(db_down())
    }
}

#[async_trait]
impl CartItemRepository for FailingStore {
    async fn find_by_id(&self, _id: &CartItemId) -> Result<Option<CartItem>, DomainError> {
        Err(db_down())
    }
    async fn add_to_member_cart(
        &self,
        _member_id: &MemberId,
        _item_id: &ItemId,
        _count: Quantity,
    ) -> Result<AddedLine, DomainError> {
        Err(db_down())
    }
    async fn update(&self, _line: &CartItem) -> Result<(), DomainError> {
        Err(db_down())
    }
    async fn delete(&self, _id: &CartItemId) -> Result<(), DomainError> {
        Err(db_down())
    }
}

#[async_trait]
impl CartReader for FailingStore {
    async fn list_details(&self, _cart_id: &CartId) -> Result<Vec<CartDetail>, DomainError> {
        Err(db_down())
    }
}
