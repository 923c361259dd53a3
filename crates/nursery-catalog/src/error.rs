//! Error types for catalog construction and loading
//!
//! Lookups never fail; a missing id is an `Option::None`. Errors only
//! arise while building or loading a catalog.

use crate::item::ItemId;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Catalog construction error
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Item id reused across the catalog
    #[error("duplicate item id {id}: in '{first}' and '{second}'")]
    DuplicateId {
        /// The reused id
        id: ItemId,
        /// Category holding the first occurrence
        first: String,
        /// Category holding the repeat
        second: String,
    },

    /// Item id of zero
    #[error("item '{name}' has id 0; ids start at 1")]
    ZeroId {
        /// Offending item name
        name: String,
    },

    /// Item with an empty display name
    #[error("item {id} has an empty name")]
    EmptyName {
        /// Offending id
        id: ItemId,
    },

    /// Price of zero or below
    #[error("item {id} has non-positive price {price}")]
    NonPositivePrice {
        /// Offending id
        id: ItemId,
        /// The rejected price
        price: Decimal,
    },

    /// Category name used twice
    #[error("duplicate category: {0}")]
    DuplicateCategory(String),

    /// Category with a blank label
    #[error("category name must not be empty")]
    EmptyCategoryName,

    /// Catalog document could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Catalog document could not be parsed
    #[error("failed to parse {format} catalog: {message}")]
    Parse {
        /// Document format
        format: &'static str,
        /// Parser message
        message: String,
    },

    /// File extension not recognised
    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(PathBuf),
}

impl CatalogError {
    /// Check if error came from the document layer rather than validation
    #[inline]
    #[must_use]
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Parse { .. } | Self::UnsupportedFormat(_)
        )
    }
}
