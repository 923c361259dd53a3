//! Cart change records
//!
//! Every mutator on [`CartStore`](crate::CartStore) returns
//! `Option<CartChange>`: `Some` when the mapping changed, `None` for a no-op.

use nursery_catalog::ItemId;
use serde::{Deserialize, Serialize};

/// A single effective change to the cart mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartChange {
    /// Quantity incremented by one (inserted at 1 when absent)
    Added {
        /// Target item
        id: ItemId,
        /// Quantity after the add
        quantity: u64,
    },

    /// Quantity overwritten
    QuantitySet {
        /// Target item
        id: ItemId,
        /// Quantity before, `None` when the entry was absent
        previous: Option<u64>,
        /// Quantity after
        quantity: u64,
    },

    /// Entry deleted
    Removed {
        /// Target item
        id: ItemId,
        /// Quantity the entry held
        previous: u64,
    },
}

impl CartChange {
    /// Item the change applies to
    #[inline]
    #[must_use]
    pub fn id(&self) -> ItemId {
        match self {
            Self::Added { id, .. } | Self::QuantitySet { id, .. } | Self::Removed { id, .. } => *id,
        }
    }

    /// Quantity stored for the item after the change (0 when removed)
    #[inline]
    #[must_use]
    pub fn quantity_after(&self) -> u64 {
        match self {
            Self::Added { quantity, .. } | Self::QuantitySet { quantity, .. } => *quantity,
            Self::Removed { .. } => 0,
        }
    }
}
