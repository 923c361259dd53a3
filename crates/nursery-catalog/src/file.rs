//! Catalog documents
//!
//! A catalog can be supplied as TOML or JSON:
//!
//! ```toml
//! [[categories]]
//! name = "Aromatic Plants"
//!
//! [[categories.items]]
//! id = 1
//! name = "African Violet"
//! price = 25.99
//! image = "/images/africaviolet.jpg"
//! description = "Beautiful purple flowering plant."
//! ```

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialized catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Categories in display order
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
}

/// One category in a catalog document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    /// Category label
    pub name: String,

    /// Items in display order
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Catalog document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// TOML document
    Toml,
    /// JSON document
    Json,
}

impl CatalogFormat {
    /// Detect format from file extension
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Format name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

impl CatalogFile {
    /// Parse document text
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] on malformed input
    pub fn parse(text: &str, format: CatalogFormat) -> Result<Self, CatalogError> {
        let parsed = match format {
            CatalogFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
            CatalogFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| CatalogError::Parse {
            format: format.as_str(),
            message,
        })
    }

    /// Validate into a catalog
    ///
    /// # Errors
    /// Returns any validation error from [`crate::CatalogBuilder::build`]
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        self.categories
            .into_iter()
            .fold(Catalog::builder(), |builder, record| {
                builder.category(record.name, record.items)
            })
            .build()
    }
}

impl From<&Catalog> for CatalogFile {
    fn from(catalog: &Catalog) -> Self {
        Self {
            categories: catalog
                .categories()
                .map(|(name, items)| CategoryRecord {
                    name: name.to_string(),
                    items: items.to_vec(),
                })
                .collect(),
        }
    }
}

impl Catalog {
    /// Parse a TOML catalog
    ///
    /// # Errors
    /// Returns parse or validation errors
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        CatalogFile::parse(text, CatalogFormat::Toml)?.into_catalog()
    }

    /// Parse a JSON catalog
    ///
    /// # Errors
    /// Returns parse or validation errors
    pub fn from_json_str(text: &str) -> Result<Self, CatalogError> {
        CatalogFile::parse(text, CatalogFormat::Json)?.into_catalog()
    }

    /// Load a catalog file, picking the format from its extension
    ///
    /// # Errors
    /// Returns IO, format, parse or validation errors
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path)
            .ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), format = format.as_str(), "loading catalog");
        CatalogFile::parse(&text, format)?.into_catalog()
    }

    /// Document form of this catalog
    #[inline]
    #[must_use]
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile::from(self)
    }
}
