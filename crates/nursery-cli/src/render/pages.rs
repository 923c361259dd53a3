//! Page bodies for the Home, Browse and Cart screens

use super::Screen;
use std::fmt;

const WELCOME: &str = "Discover our extensive collection of beautiful house plants that will \
transform your living space into a green paradise. From aromatic herbs to exotic succulents, \
we have the perfect plants to brighten your home and purify your air.";

const FEATURES: [(&str, &str); 3] = [
    (
        "Premium Quality",
        "Hand-selected plants from trusted growers, ensuring the highest quality for your home.",
    ),
    (
        "Expert Care Guides",
        "Detailed care instructions included with every plant to help you succeed as a plant parent.",
    ),
    (
        "Fast Delivery",
        "Quick and safe delivery to ensure your plants arrive healthy and ready to thrive.",
    ),
];

impl Screen<'_> {
    pub(super) fn write_home(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Welcome to {}", self.config.store_name)?;
        writeln!(f, "{}", self.config.tagline)?;
        writeln!(f)?;
        writeln!(f, "{WELCOME}")?;
        writeln!(f)?;
        for (title, body) in FEATURES {
            writeln!(f, "* {title}: {body}")?;
        }
        writeln!(f)?;
        writeln!(f, "Shop Our Plants -> type 'plants'")
    }

    pub(super) fn write_browse(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Our Plant Collection")?;
        writeln!(f, "Choose from our carefully curated selection of house plants")?;

        for (category, items) in self.catalog.categories() {
            writeln!(f)?;
            writeln!(f, "-- {category} --")?;
            for item in items {
                writeln!(
                    f,
                    "  [{:>3}] {:<20} {:>9}",
                    item.id,
                    item.name,
                    self.money(item.price)
                )?;
                if !item.description.is_empty() {
                    writeln!(f, "        {}", item.description)?;
                }
                let image = item.image_url(&self.config.asset_base);
                if !image.is_empty() {
                    writeln!(f, "        image: {image}")?;
                }
            }
        }
        writeln!(f)?;
        writeln!(f, "Add to Cart -> type 'add <id>'")
    }

    pub(super) fn write_cart(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cart = &self.snapshot.cart;
        if cart.is_empty() {
            writeln!(f, "Your cart is empty")?;
            return writeln!(f, "Continue Shopping -> type 'plants'");
        }

        writeln!(f, "Shopping Cart")?;
        writeln!(f)?;
        for line in &cart.lines {
            writeln!(
                f,
                "  [{:>3}] {:<20} {:>9} each  x{:<4} {:>10}",
                line.id,
                line.name,
                self.money(line.unit_price),
                line.quantity,
                self.money(line.subtotal)
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Total: {}    Items: {}",
            self.money(cart.total_cost),
            cart.total_quantity
        )?;
        writeln!(f, "Continue Shopping -> 'plants'    Checkout -> 'checkout'")
    }
}
