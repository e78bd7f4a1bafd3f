//! Cart line items.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product as offered for adding to the cart.
///
/// Everything the cart captures about a product at add time. The name,
/// price and image are copied into the line item and never re-synced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCandidate {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Price of a single unit.
    pub unit_price: Price,
    /// Image URL.
    pub image_ref: String,
}

impl ProductCandidate {
    /// Create a new candidate.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Price,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            image_ref: image_ref.into(),
        }
    }
}

/// One product's presence in the cart.
///
/// The serialized field names (`id`, `name`, `price`, `image`, `quantity`)
/// are the persisted snapshot format and must not change.
///
/// The quantity is a [`NonZeroU32`], so a line item can never be stored or
/// decoded with a quantity of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier, unique within a cart.
    pub id: ProductId,
    /// Display name captured at add time.
    pub name: String,
    /// Unit price captured at add time.
    #[serde(rename = "price")]
    pub unit_price: Price,
    /// Image URL captured at add time.
    #[serde(rename = "image")]
    pub image_ref: String,
    /// Number of units, at least one.
    pub quantity: NonZeroU32,
}

impl LineItem {
    /// Create a line item holding a single unit of `candidate`.
    #[must_use]
    pub fn from_candidate(candidate: ProductCandidate) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            unit_price: candidate.unit_price,
            image_ref: candidate.image_ref,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Returns the quantity as a plain integer.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Unit price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity.get())
    }
}
