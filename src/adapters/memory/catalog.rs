//! In-memory catalog and member directory.
//!
//! Stands in for the external item and member stores in tests and local
//! development.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::catalog::Item;
use crate::domain::foundation::{DomainError, ItemId, MemberId};
use crate::domain::member::Member;
use crate::ports::{ItemReader, MemberReader};

/// In-memory implementation of `ItemReader` and `MemberReader`.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: RwLock<HashMap<ItemId, Item>>,
    members: RwLock<HashMap<MemberId, Member>>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item while building.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.get_mut().insert(*item.id(), item);
        self
    }

    /// Adds a member while building.
    pub fn with_member(mut self, member: Member) -> Self {
        self.members.get_mut().insert(*member.id(), member);
        self
    }
}

#[async_trait]
impl ItemReader for InMemoryCatalog {
    async fn find_by_id(&self, id: &ItemId) -> Result<Option<Item>, DomainError> {
        Ok(self.items.read().await.get(id).cloned())
    }
}

#[async_trait]
impl MemberReader for InMemoryCatalog {
    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError> {
        Ok(self
            .members
            .read()
            .await
            .values()
            .find(|m| m.email() == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> Item {
        Item::new(ItemId::new(), "Lamp", 3_000, None).unwrap()
    }

    #[tokio::test]
    async fn finds_item_registered_while_building() {
        let item = lamp();
        let catalog = InMemoryCatalog::new().with_item(item.clone());

        let found = ItemReader::find_by_id(&catalog, item.id()).await.unwrap();
        assert_eq!(found, Some(item));
    }

    #[tokio::test]
    async fn unknown_item_is_none() {
        let catalog = InMemoryCatalog::new();
        let found = ItemReader::find_by_id(&catalog, &ItemId::new()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn finds_member_by_exact_email() {
        let member = Member::new(MemberId::new(), "a@shop.test", "A").unwrap();
        let catalog = InMemoryCatalog::new().with_member(member.clone());

        assert_eq!(
            catalog.find_by_email("a@shop.test").await.unwrap(),
            Some(member)
        );
        assert!(catalog.find_by_email("b@shop.test").await.unwrap().is_none());
    }
}
