//! Line items: the cart joined against the catalog

use crate::money::{line_cost, round_cents};
use nursery_catalog::{Item, ItemId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A resolved `(Item, quantity)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem<'a> {
    /// Catalog item
    pub item: &'a Item,
    /// Positive quantity
    pub quantity: u64,
}

impl LineItem<'_> {
    /// Unit price × quantity, rounded to cents
    #[inline]
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        round_cents(line_cost(self.item.price, self.quantity))
    }

    /// Owned summary of this line
    #[must_use]
    pub fn to_summary(&self) -> LineSummary {
        LineSummary {
            id: self.item.id,
            name: self.item.name.clone(),
            unit_price: self.item.price,
            quantity: self.quantity,
            subtotal: self.subtotal(),
        }
    }
}

/// Owned, serializable line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSummary {
    /// Item id
    pub id: ItemId,
    /// Item name
    pub name: String,
    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    /// Quantity
    pub quantity: u64,
    /// Rounded line total
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

/// Cart totals plus resolved lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    /// Resolved lines in cart order
    pub lines: Vec<LineSummary>,
    /// Sum of all stored quantities, resolvable or not
    pub total_quantity: u64,
    /// Rounded cost of resolvable entries
    #[serde(with = "rust_decimal::serde::float")]
    pub total_cost: Decimal,
}

impl CartSummary {
    /// Check if there is nothing to show
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
