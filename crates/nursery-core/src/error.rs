//! Error types for storefront setup
//!
//! Only construction can fail: reading configuration or loading a custom
//! catalog. Once a [`Storefront`](crate::Storefront) exists, no action on it
//! returns an error.

use nursery_catalog::CatalogError;
use std::path::PathBuf;

/// Storefront setup error
#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected shape
    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Catalog failed to load or validate
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
