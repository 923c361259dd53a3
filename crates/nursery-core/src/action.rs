//! User actions and their outcomes

use crate::checkout::CheckoutAcknowledgement;
use crate::notify::StoreChange;
use crate::view::View;
use nursery_catalog::ItemId;
use serde::{Deserialize, Serialize};

/// One user action, applied synchronously by
/// [`Storefront::dispatch`](crate::Storefront::dispatch)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Add one unit
    AddOne {
        /// Target item
        id: ItemId,
    },
    /// Set an absolute quantity; `<= 0` removes
    SetQuantity {
        /// Target item
        id: ItemId,
        /// New quantity
        quantity: i64,
    },
    /// Quantity + 1
    Increment {
        /// Target item
        id: ItemId,
    },
    /// Quantity - 1
    Decrement {
        /// Target item
        id: ItemId,
    },
    /// Delete the entry
    Remove {
        /// Target item
        id: ItemId,
    },
    /// Switch screens
    Navigate {
        /// Destination
        to: View,
    },
    /// Terminal acknowledgement; changes nothing
    Checkout,
}

/// Result of dispatching an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed and subscribers were notified
    Changed(StoreChange),
    /// Action was a no-op
    Unchanged,
    /// Checkout acknowledged
    CheckedOut(CheckoutAcknowledgement),
}

impl Outcome {
    /// Check if state changed
    #[inline]
    #[must_use]
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Changed(_))
    }
}

impl From<Option<StoreChange>> for Outcome {
    fn from(change: Option<StoreChange>) -> Self {
        change.map_or(Self::Unchanged, Self::Changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn actions_use_tagged_json() {
        let add: Action = serde_json::from_value(json!({ "action": "add_one", "id": 2 })).unwrap();
        assert_eq!(add, Action::AddOne { id: ItemId(2) });

        let set = Action::SetQuantity { id: ItemId(6), quantity: -1 };
        assert_eq!(
            serde_json::to_value(set).unwrap(),
            json!({ "action": "set_quantity", "id": 6, "quantity": -1 })
        );

        let go: Action = serde_json::from_value(json!({ "action": "navigate", "to": "cart" })).unwrap();
        assert_eq!(go, Action::Navigate { to: View::Cart });
        assert_eq!(serde_json::to_value(Action::Checkout).unwrap(), json!({ "action": "checkout" }));
    }

    #[test]
    fn outcome_from_optional_change() {
        assert_eq!(Outcome::from(None::<StoreChange>), Outcome::Unchanged);
        assert!(!Outcome::Unchanged.is_change());
    }
}
