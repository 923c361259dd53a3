//! Paradise Nursery Cart
//!
//! The cart is a mapping from [`ItemId`](nursery_catalog::ItemId) to a
//! positive quantity. Absence means zero; no zero or negative quantity is
//! ever stored.
//!
//! # Core Operations
//!
//! - **Mutate**: [`CartStore::add_one`], [`CartStore::set_quantity`],
//!   [`CartStore::remove_entry`]
//! - **Derive**: [`CartStore::total_quantity`], [`CartStore::total_cost`],
//!   [`CartStore::line_items`]
//!
//! The store never consults the catalog when mutating. Ids that do not
//! resolve are kept and counted, but contribute nothing to cost and are
//! filtered out of line items.
//!
//! # Example
//!
//! ```rust
//! use nursery_cart::CartStore;
//! use nursery_catalog::{Catalog, ItemId};
//! use rust_decimal::Decimal;
//!
//! let catalog = Catalog::paradise_nursery();
//! let mut cart = CartStore::new();
//!
//! cart.add_one(ItemId(2));
//! cart.add_one(ItemId(2));
//! assert_eq!(cart.total_quantity(), 2);
//! assert_eq!(cart.total_cost(&catalog), Decimal::new(3798, 2));
//! ```

#![warn(missing_docs)]

pub mod change;
pub mod line;
pub mod money;
pub mod store;

// Re-exports
pub use change::CartChange;
pub use line::{CartSummary, LineItem, LineSummary};
pub use money::{line_cost, round_cents};
pub use store::CartStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
