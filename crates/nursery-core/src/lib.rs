//! Paradise Nursery Core
//!
//! The storefront session that the presentation layer drives:
//! - Owns the catalog, the cart and the active view
//! - Applies user actions strictly in order, one at a time
//! - Publishes each effective change to subscribers synchronously
//! - Acknowledges checkout without mutating anything
//!
//! # Example
//!
//! ```rust
//! use nursery_core::{Action, Storefront, View};
//! use nursery_catalog::ItemId;
//!
//! let mut store = Storefront::paradise_nursery();
//! store.subscribe(|change, snapshot| {
//!     println!("{change:?} -> badge {:?}", snapshot.badge);
//! });
//!
//! store.dispatch(Action::AddOne { id: ItemId(2) });
//! store.dispatch(Action::Navigate { to: View::Cart });
//!
//! assert_eq!(store.total_quantity(), 1);
//! assert_eq!(store.view(), View::Cart);
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

// Core modules
pub mod action;
pub mod checkout;
pub mod config;
pub mod error;
pub mod notify;
pub mod storefront;
pub mod view;

// Re-exports for convenience
pub use action::{Action, Outcome};
pub use checkout::CheckoutAcknowledgement;
pub use config::StorefrontConfig;
pub use error::StorefrontError;
pub use notify::{Snapshot, StoreChange, SubscriptionId};
pub use storefront::Storefront;
pub use view::{Navigation, ParseViewError, View, ViewController};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving a storefront session
    pub use crate::{
        Action, CheckoutAcknowledgement, Outcome, Snapshot, StoreChange, Storefront,
        StorefrontConfig, View,
    };
    pub use nursery_cart::{CartChange, CartStore, LineItem};
    pub use nursery_catalog::{Catalog, Item, ItemId};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
