//! Cart store
//!
//! Provides [`CartStore`], the only owner of cart quantities.
//!
//! Entries are kept in an [`IndexMap`] so iteration follows first-insertion
//! order. Removal uses `shift_remove`, which keeps the order of the
//! remaining entries stable across renders.

use crate::change::CartChange;
use crate::line::{CartSummary, LineItem};
use crate::money::{line_cost, round_cents};
use indexmap::IndexMap;
use nursery_catalog::{Catalog, ItemId};
use rust_decimal::Decimal;

/// In-memory cart: item id -> positive quantity
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    entries: IndexMap<ItemId, u64>,
}

impl CartStore {
    /// Create empty cart
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment quantity by one, inserting at 1 when absent.
    ///
    /// The id is not checked against any catalog. An entry already at
    /// `u64::MAX` is left alone and no change is reported.
    pub fn add_one(&mut self, id: ItemId) -> Option<CartChange> {
        let slot = self.entries.entry(id).or_insert(0);
        let quantity = slot.checked_add(1)?;
        *slot = quantity;

        tracing::debug!(%id, quantity, "cart add");
        Some(CartChange::Added { id, quantity })
    }

    /// Set an absolute quantity.
    ///
    /// `quantity <= 0` removes the entry; any positive value is stored as
    /// given. Repeating the same call is a no-op.
    pub fn set_quantity(&mut self, id: ItemId, quantity: i64) -> Option<CartChange> {
        match u64::try_from(quantity) {
            Ok(quantity) if quantity > 0 => self.store(id, quantity),
            _ => self.remove_entry(id),
        }
    }

    /// Delete the entry if present
    pub fn remove_entry(&mut self, id: ItemId) -> Option<CartChange> {
        let previous = self.entries.shift_remove(&id)?;

        tracing::debug!(%id, previous, "cart remove");
        Some(CartChange::Removed { id, previous })
    }

    /// Quantity + 1
    pub fn increment(&mut self, id: ItemId) -> Option<CartChange> {
        let next = self.quantity_of(id).checked_add(1)?;
        self.store(id, next)
    }

    /// Quantity - 1; reaching zero removes the entry
    pub fn decrement(&mut self, id: ItemId) -> Option<CartChange> {
        match self.quantity_of(id) {
            0 => None,
            1 => self.remove_entry(id),
            n => self.store(id, n - 1),
        }
    }

    fn store(&mut self, id: ItemId, quantity: u64) -> Option<CartChange> {
        let previous = self.entries.insert(id, quantity);
        if previous == Some(quantity) {
            return None;
        }

        tracing::debug!(%id, ?previous, quantity, "cart set quantity");
        Some(CartChange::QuantitySet {
            id,
            previous,
            quantity,
        })
    }

    /// Stored quantity, 0 when absent
    #[inline]
    #[must_use]
    pub fn quantity_of(&self, id: ItemId) -> u64 {
        self.entries.get(&id).copied().unwrap_or(0)
    }

    /// Raw entries in cart order, including ids that do not resolve
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (ItemId, u64)> + '_ {
        self.entries.iter().map(|(&id, &quantity)| (id, quantity))
    }

    /// Number of distinct stored ids
    #[inline]
    #[must_use]
    pub fn distinct_items(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is stored
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all stored quantities, saturating at `u64::MAX`
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.entries.values().fold(0, |sum, &q| sum.saturating_add(q))
    }

    /// Cost of all resolvable entries, rounded to cents.
    ///
    /// Accumulates exactly, then rounds once. Unknown ids contribute zero.
    /// Amounts beyond [`Decimal::MAX`] saturate.
    #[must_use]
    pub fn total_cost(&self, catalog: &Catalog) -> Decimal {
        let total = self
            .entries
            .iter()
            .filter_map(|(&id, &quantity)| {
                catalog
                    .lookup_by_id(id)
                    .map(|item| line_cost(item.price, quantity))
            })
            .fold(Decimal::ZERO, Decimal::saturating_add);
        round_cents(total)
    }

    /// Join against the catalog, dropping ids that do not resolve
    #[must_use]
    pub fn line_items<'a>(&self, catalog: &'a Catalog) -> Vec<LineItem<'a>> {
        self.entries
            .iter()
            .filter_map(|(&id, &quantity)| {
                catalog
                    .lookup_by_id(id)
                    .map(|item| LineItem { item, quantity })
            })
            .collect()
    }

    /// Lines and totals in one owned value
    #[must_use]
    pub fn summary(&self, catalog: &Catalog) -> CartSummary {
        CartSummary {
            lines: self
                .line_items(catalog)
                .iter()
                .map(LineItem::to_summary)
                .collect(),
            total_quantity: self.total_quantity(),
            total_cost: self.total_cost(catalog),
        }
    }
}
