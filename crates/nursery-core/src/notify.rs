//! Change notification
//!
//! Subscribers are plain closures called synchronously, in subscription
//! order, after each effective mutation. No-ops publish nothing.

use crate::view::{Navigation, View};
use nursery_cart::{CartChange, CartSummary};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An effective state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "change", rename_all = "snake_case")]
pub enum StoreChange {
    /// Cart mapping changed
    Cart(CartChange),
    /// Active view changed
    View(Navigation),
}

/// Everything the presentation layer needs to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Active view
    pub view: View,
    /// Cart lines and totals
    pub cart: CartSummary,
    /// Navigation badge; only present when the cart holds something
    pub badge: Option<u64>,
}

/// Subscription handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&StoreChange, &Snapshot)>;

/// Ordered subscriber registry
#[derive(Default)]
pub(crate) struct Subscribers {
    next: u64,
    entries: Vec<(SubscriptionId, Callback)>,
}

impl Subscribers {
    pub(crate) fn add(&mut self, callback: Callback) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(sid, _)| *sid != id);
        self.entries.len() != before
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn publish(&mut self, change: &StoreChange, snapshot: &Snapshot) {
        for (_, callback) in &mut self.entries {
            callback(change, snapshot);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("count", &self.entries.len())
            .finish()
    }
}
