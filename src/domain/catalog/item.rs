//! Catalog item entity.
//!
//! Items are owned by the catalog; the cart only reads them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ItemId, ValidationError};

/// A purchasable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    /// Unit price in minor currency units.
    price: i64,
    /// Representative image shown next to the cart line.
    image_url: Option<String>,
}

impl Item {
    /// Create a catalog item.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name is blank
    /// - `OutOfRange` if price is negative
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: i64,
        image_url: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if price < 0 {
            return Err(ValidationError::out_of_range("price", 0, i64::MAX, price));
        }
        Ok(Self {
            id,
            name,
            price,
            image_url,
        })
    }

    /// Reconstitute an item from persistence (no validation).
    pub fn reconstitute(id: ItemId, name: String, price: i64, image_url: Option<String>) -> Self {
        Self {
            id,
            name,
            price,
            image_url,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}
