//! Quantity value object for cart lines.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Number of units of one item held in a cart line.
///
/// # Invariants
///
/// - Always within `Quantity::MIN..=Quantity::MAX`
/// - Increments saturate at `Quantity::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// Smallest quantity a line may hold.
    pub const MIN: u32 = 1;

    /// Largest quantity a line may hold.
    pub const MAX: u32 = 999_999;

    /// Creates a Quantity, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ValidationError::out_of_range(
                "count",
                i64::from(Self::MIN),
                i64::from(Self::MAX),
                value,
            ));
        }
        Ok(Self(value as u32))
    }

    /// Returns the value as u32.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Returns the sum of two quantities, capped at `Quantity::MAX`.
    pub fn saturating_add(self, other: Quantity) -> Self {
        Self(self.0.saturating_add(other.0).min(Self::MAX))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Quantity::try_new(raw).map_err(serde::de::Error::custom)
    }
}
