//! View controller
//!
//! Invalid screens are unrepresentable: [`View`] is a closed enum, so
//! navigation has no failure mode.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Landing page
    #[default]
    Home,
    /// Catalog by category
    Browse,
    /// Cart contents and totals
    Cart,
}

impl View {
    /// All views in navigation-bar order
    pub const ALL: [View; 3] = [View::Home, View::Browse, View::Cart];

    /// Stable lowercase name
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            View::Home => "home",
            View::Browse => "browse",
            View::Cart => "cart",
        }
    }

    /// Navigation-bar label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Browse => "Plants",
            View::Cart => "Cart",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised view name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view '{0}'; expected home, browse or cart")]
pub struct ParseViewError(pub String);

impl FromStr for View {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "landing" => Ok(View::Home),
            "browse" | "plants" | "products" => Ok(View::Browse),
            "cart" => Ok(View::Cart),
            other => Err(ParseViewError(other.to_string())),
        }
    }
}

/// A view transition that took effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    /// Previous view
    pub from: View,
    /// New view
    pub to: View,
}

/// Holds the single active view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewController {
    current: View,
}

impl ViewController {
    /// Start at [`View::Home`]
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Active view
    #[inline]
    #[must_use]
    pub fn current(&self) -> View {
        self.current
    }

    /// Switch views; `None` when already there
    pub fn navigate_to(&mut self, to: View) -> Option<Navigation> {
        if self.current == to {
            return None;
        }
        let from = std::mem::replace(&mut self.current, to);
        tracing::debug!(%from, %to, "navigate");
        Some(Navigation { from, to })
    }
}
