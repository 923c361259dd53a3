//! Paradise Nursery Catalog
//!
//! Static, read-only item data grouped by category.
//!
//! # Overview
//!
//! - **Item**: a purchasable plant with a unique [`ItemId`]
//! - **Catalog**: ordered categories of items, immutable once built
//! - **CatalogBuilder**: validates id uniqueness and item fields
//! - **CatalogFile**: TOML/JSON document form for loading custom catalogs
//!
//! # Example
//!
//! ```rust
//! use nursery_catalog::{Catalog, ItemId};
//!
//! let catalog = Catalog::paradise_nursery();
//!
//! let aloe = catalog.lookup_by_id(ItemId(2)).unwrap();
//! assert_eq!(aloe.name, "Aloe Vera");
//!
//! assert!(catalog.lookup_by_id(ItemId(999)).is_none());
//! ```

#![warn(missing_docs)]

pub mod bundled;
pub mod catalog;
pub mod error;
pub mod file;
pub mod item;

// Re-exports
pub use catalog::{Catalog, CatalogBuilder};
pub use error::CatalogError;
pub use file::{CatalogFile, CatalogFormat, CategoryRecord};
pub use item::{Item, ItemId};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for catalog consumers
    pub use crate::{Catalog, CatalogBuilder, CatalogError, Item, ItemId};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
