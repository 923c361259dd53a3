//! Storefront configuration
//!
//! Every key is optional; missing keys take the house defaults.
//!
//! ```toml
//! store_name = "Paradise Nursery"
//! tagline = "Where Green Dreams Come True"
//! currency_symbol = "$"
//! asset_base = "https://cdn.example.com"
//! catalog_path = "plants.toml"
//! ```

use crate::error::StorefrontError;
use nursery_catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Storefront configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Name shown in the navigation bar and checkout message
    pub store_name: String,
    /// Landing-page subtitle
    pub tagline: String,
    /// Prefix for rendered prices
    pub currency_symbol: String,
    /// Base prepended to relative image references
    pub asset_base: String,
    /// Custom catalog document; the bundled catalog when unset
    pub catalog_path: Option<PathBuf>,
    /// Override for the checkout acknowledgement
    pub checkout_message: Option<String>,
}

impl StorefrontConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With store name
    #[inline]
    #[must_use]
    pub fn with_store_name(mut self, name: impl Into<String>) -> Self {
        self.store_name = name.into();
        self
    }

    /// With currency symbol
    #[inline]
    #[must_use]
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// With asset base
    #[inline]
    #[must_use]
    pub fn with_asset_base(mut self, base: impl Into<String>) -> Self {
        self.asset_base = base.into();
        self
    }

    /// With catalog document path
    #[inline]
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// With checkout message
    #[inline]
    #[must_use]
    pub fn with_checkout_message(mut self, message: impl Into<String>) -> Self {
        self.checkout_message = Some(message.into());
        self
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// Returns [`StorefrontError::ConfigParse`] on malformed input
    pub fn from_toml_str(text: &str) -> Result<Self, StorefrontError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a TOML config file.
    ///
    /// A relative `catalog_path` is resolved against the config file's
    /// directory.
    ///
    /// # Errors
    /// Returns IO or parse errors
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StorefrontError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StorefrontError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;

        if let (Some(catalog), Some(dir)) = (config.catalog_path.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }

        tracing::info!(path = %path.display(), store = %config.store_name, "loaded config");
        Ok(config)
    }

    /// Load the configured catalog, or the bundled one
    ///
    /// # Errors
    /// Returns catalog load or validation errors
    pub fn load_catalog(&self) -> Result<Catalog, StorefrontError> {
        match &self.catalog_path {
            Some(path) => Ok(Catalog::load(path)?),
            None => Ok(Catalog::paradise_nursery()),
        }
    }

    /// Checkout text, with the store name filled in
    #[must_use]
    pub fn checkout_text(&self) -> String {
        self.checkout_message.clone().unwrap_or_else(|| {
            format!(
                "Thank you for shopping at {}! Checkout functionality would be implemented here.",
                self.store_name
            )
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_name: "Paradise Nursery".to_string(),
            tagline: "Where Green Dreams Come True".to_string(),
            currency_symbol: "$".to_string(),
            asset_base: String::new(),
            catalog_path: None,
            checkout_message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn empty_toml_is_default() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = StorefrontConfig::from_toml_str("store_name = \"Fern Hollow\"").unwrap();
        assert_eq!(config.store_name, "Fern Hollow");
        assert_eq!(config.currency_symbol, "$");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn malformed_toml_is_error() {
        let err = StorefrontConfig::from_toml_str("store_name = ").unwrap_err();
        assert!(matches!(err, StorefrontError::ConfigParse(_)));
    }

    #[test]
    fn checkout_text_uses_store_name() {
        let config = StorefrontConfig::new().with_store_name("Fern Hollow");
        assert!(config.checkout_text().starts_with("Thank you for shopping at Fern Hollow!"));

        let custom = config.with_checkout_message("Order placed.");
        assert_eq!(custom.checkout_text(), "Order placed.");
    }

    #[test]
    fn load_resolves_relative_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("plants.json");
        std::fs::write(
            &catalog_path,
            r#"{"categories": [{"name": "Palms", "items": [{"id": 1, "name": "Areca", "price": 39.99}]}]}"#,
        )
        .unwrap();

        let config_path = dir.path().join("nursery.toml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "catalog_path = \"plants.json\"").unwrap();

        let config = StorefrontConfig::load(&config_path).unwrap();
        assert_eq!(config.catalog_path.as_deref(), Some(catalog_path.as_path()));

        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = StorefrontConfig::load(dir.path().join("none.toml")).unwrap_err();
        assert!(matches!(err, StorefrontError::ConfigIo { .. }));
    }

    #[test]
    fn default_catalog_is_bundled() {
        let catalog = StorefrontConfig::default().load_catalog().unwrap();
        assert_eq!(catalog.len(), 9);
    }
}
