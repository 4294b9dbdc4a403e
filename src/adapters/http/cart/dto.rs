//! HTTP DTOs for cart endpoints.
//!
//! Wire names are camelCase to match the storefront client.

use serde::{Deserialize, Serialize};

use crate::domain::cart::MIN_QUANTITY_MESSAGE;
use crate::domain::foundation::{CartItemId, ItemId, Quantity};
use crate::ports::CartDetail;

/// Shown when `itemId` is absent or blank.
pub const ITEM_ID_REQUIRED_MESSAGE: &str = "Item id is required.";

/// Shown when `itemId` is not a valid identifier.
pub const ITEM_ID_INVALID_MESSAGE: &str = "Item id is invalid.";

/// Shown when a count exceeds `Quantity::MAX`.
pub const MAX_QUANTITY_MESSAGE: &str = "Please add at most 999999 items.";

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /cart`.
///
/// Both fields are optional on the wire so missing values turn into
/// field messages instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    #[serde(default)]
    pub item_id: Option<String>,
    #[serde(default)]
    pub count: Option<i64>,
}

impl AddCartItemRequest {
    /// Checks every field and returns all failures at once.
    pub fn validate(&self) -> Result<(ItemId, Quantity), Vec<&'static str>> {
        let mut errors = Vec::new();

        let item_id = match self.item_id.as_deref().map(str::trim) {
            None | Some("") => {
                errors.push(ITEM_ID_REQUIRED_MESSAGE);
                None
            }
            Some(raw) => match raw.parse::<ItemId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push(ITEM_ID_INVALID_MESSAGE);
                    None
                }
            },
        };

        let count = match parse_count(self.count) {
            Ok(count) => Some(count),
            Err(message) => {
                errors.push(message);
                None
            }
        };

        match (item_id, count) {
            (Some(item_id), Some(count)) if errors.is_empty() => Ok((item_id, count)),
            _ => Err(errors),
        }
    }
}

/// Query string of `PATCH /cartItem/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCountQuery {
    #[serde(default)]
    pub count: Option<String>,
}

impl UpdateCountQuery {
    /// Parses `count`; anything that is not a whole number of at least one
    /// is rejected with the minimum-quantity message.
    pub fn quantity(&self) -> Result<Quantity, &'static str> {
        let count = self
            .count
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok());
        parse_count(count)
    }
}

fn parse_count(count: Option<i64>) -> Result<Quantity, &'static str> {
    match count {
        Some(n) if n > i64::from(Quantity::MAX) => Err(MAX_QUANTITY_MESSAGE),
        Some(n) => Quantity::try_new(n).map_err(|_| MIN_QUANTITY_MESSAGE),
        None => Err(MIN_QUANTITY_MESSAGE),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for cart line commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemCommandResponse {
    pub cart_item_id: String,
}

impl From<CartItemId> for CartItemCommandResponse {
    fn from(id: CartItemId) -> Self {
        Self {
            cart_item_id: id.to_string(),
        }
    }
}

/// One line in `GET /cart`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub cart_item_id: String,
    pub item_id: String,
    pub item_name: String,
    pub price: i64,
    pub count: u32,
    pub line_total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub added_at: String,
}

impl From<CartDetail> for CartItemResponse {
    fn from(detail: CartDetail) -> Self {
        Self {
            cart_item_id: detail.cart_item_id.to_string(),
            item_id: detail.item_id.to_string(),
            line_total: detail.line_total(),
            item_name: detail.item_name,
            price: detail.price,
            count: detail.count,
            image_url: detail.image_url,
            added_at: detail.added_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Body of `GET /cart`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartListResponse {
    pub items: Vec<CartItemResponse>,
}

impl From<Vec<CartDetail>> for CartListResponse {
    fn from(details: Vec<CartDetail>) -> Self {
        Self {
            items: details.into_iter().map(Into::into).collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            code: "FORBIDDEN".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
