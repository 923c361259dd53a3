//! Text rendering
//!
//! A [`Screen`] is a pure function of configuration, catalog and a
//! [`Snapshot`]; it never reads the cart directly.

mod pages;

use nursery_cart::round_cents;
use nursery_catalog::Catalog;
use nursery_core::{Snapshot, StorefrontConfig, View};
use rust_decimal::Decimal;
use std::fmt;

/// Format an amount as currency with two decimals
#[must_use]
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    format!("{symbol}{:.2}", round_cents(amount))
}

/// One rendered screen: navigation bar plus the active page
#[derive(Debug, Clone, Copy)]
pub struct Screen<'a> {
    config: &'a StorefrontConfig,
    catalog: &'a Catalog,
    snapshot: &'a Snapshot,
}

impl<'a> Screen<'a> {
    /// Bind the inputs of one render
    #[inline]
    #[must_use]
    pub fn new(config: &'a StorefrontConfig, catalog: &'a Catalog, snapshot: &'a Snapshot) -> Self {
        Self {
            config,
            catalog,
            snapshot,
        }
    }

    fn money(&self, amount: Decimal) -> String {
        format_money(amount, &self.config.currency_symbol)
    }

    fn write_nav(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "== {} ==", self.config.store_name)?;
        for view in View::ALL {
            let label = match (view, self.snapshot.badge) {
                (View::Cart, Some(count)) => format!("{} ({count})", view.label()),
                _ => view.label().to_string(),
            };
            if view == self.snapshot.view {
                write!(f, "  [{label}]")?;
            } else {
                write!(f, "   {label} ")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_nav(f)?;
        writeln!(f)?;
        match self.snapshot.view {
            View::Home => self.write_home(f),
            View::Browse => self.write_browse(f),
            View::Cart => self.write_cart(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nursery_core::Storefront;
    use nursery_catalog::ItemId;

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(format_money(Decimal::new(3798, 2), "$"), "$37.98");
        assert_eq!(format_money(Decimal::ZERO, "$"), "$0.00");
        assert_eq!(format_money(Decimal::new(25, 0), "€"), "€25.00");
        assert_eq!(format_money(Decimal::new(10_005, 3), "$"), "$10.01");
    }

    #[test]
    fn nav_marks_active_view_and_badge() {
        let mut store = Storefront::paradise_nursery();
        let render = |store: &Storefront| {
            let snapshot = store.snapshot();
            Screen::new(store.config(), store.catalog(), &snapshot).to_string()
        };

        let first = render(&store);
        let nav = first.lines().next().unwrap();
        assert!(nav.starts_with("== Paradise Nursery =="));
        assert!(nav.contains("[Home]"));
        assert!(!nav.contains("Cart ("));

        store.add_one(ItemId(2));
        store.add_one(ItemId(3));
        store.navigate_to(View::Browse);
        let second = render(&store);
        let nav = second.lines().next().unwrap();
        assert!(nav.contains("[Plants]"));
        assert!(nav.contains("Cart (2)"));
    }
}
