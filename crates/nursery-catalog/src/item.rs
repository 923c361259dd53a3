//! Catalog item types
//!
//! Provides [`ItemId`] and [`Item`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Item identifier
///
/// Catalog items always carry an id of at least 1. The cart accepts any
/// value, including ids that resolve to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Get raw value
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<u32> for ItemId {
    #[inline]
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A purchasable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id across the whole catalog
    pub id: ItemId,

    /// Display name
    pub name: String,

    /// Unit price, exact to the cent
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Asset reference (path or URL), resolved at render time
    #[serde(default, rename = "image", alias = "image_ref")]
    pub image_ref: String,

    /// Display description
    #[serde(default)]
    pub description: String,
}

impl Item {
    /// Create new item
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_ref: String::new(),
            description: String::new(),
        }
    }

    /// With image reference
    #[inline]
    #[must_use]
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Resolve the image reference against an asset base.
    ///
    /// Absolute URLs and empty references are returned unchanged.
    #[must_use]
    pub fn image_url(&self, base: &str) -> String {
        if self.image_ref.is_empty() || self.image_ref.contains("://") || base.is_empty() {
            return self.image_ref.clone();
        }
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            self.image_ref.trim_start_matches('/')
        )
    }
}
