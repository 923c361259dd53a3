//! The Paradise Nursery house catalog

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::item::Item;
use rust_decimal::Decimal;

fn plant(id: u32, name: &str, cents: i64, image: &str, description: &str) -> Item {
    Item::new(id, name, Decimal::new(cents, 2))
        .with_image(image)
        .with_description(description)
}

impl Catalog {
    /// The bundled nine-plant catalog in three categories
    #[must_use]
    pub fn paradise_nursery() -> Self {
        match paradise_nursery_catalog() {
            Ok(catalog) => catalog,
            Err(e) => unreachable!("bundled catalog is invalid: {e}"),
        }
    }
}

/// Build the bundled catalog through the validating builder
///
/// # Errors
/// Never fails for the shipped data; kept fallible so tests can assert it.
pub fn paradise_nursery_catalog() -> Result<Catalog, CatalogError> {
    Catalog::builder()
        .category(
            "Aromatic Plants",
            [
                plant(
                    1,
                    "African Violet",
                    2599,
                    "/images/africaviolet.jpg",
                    "Beautiful purple flowering plant with velvety leaves. Perfect for indoor spaces with bright, indirect light.",
                ),
                plant(
                    2,
                    "Aloe Vera",
                    1899,
                    "/images/aloevera.jpg",
                    "Succulent plant known for its healing properties. Low maintenance and perfect for beginners.",
                ),
                plant(
                    3,
                    "Echeveria",
                    1599,
                    "/images/echeveria.jpg",
                    "Stunning rosette-shaped succulent with blue-green leaves. Drought tolerant and easy to care for.",
                ),
            ],
        )
        .category(
            "Medicinal Plants",
            [
                plant(
                    4,
                    "Fiddle Leaf Fig",
                    8999,
                    "/images/fiddleleaffig.jpg",
                    "Large, glossy leaves make this a stunning statement plant. Requires bright, indirect light.",
                ),
                plant(
                    5,
                    "Jade Plant",
                    2299,
                    "/images/jadeplant.jpg",
                    "Symbol of good luck and prosperity. Thick, fleshy leaves store water, making it very low maintenance.",
                ),
                plant(
                    6,
                    "Monstera",
                    4599,
                    "/images/monstera.jpg",
                    "Iconic split-leaf plant that adds tropical vibes to any room. Easy to grow and propagate.",
                ),
            ],
        )
        .category(
            "Exotic Plants",
            [
                plant(
                    7,
                    "Orchid",
                    3599,
                    "/images/orchid.jpg",
                    "Elegant flowering plant with long-lasting blooms. Perfect for adding sophistication to your home.",
                ),
                plant(
                    8,
                    "Snake Plant",
                    2899,
                    "/images/snakeplant.jpg",
                    "Air-purifying plant with striking upright leaves. Extremely low maintenance and tolerates low light.",
                ),
                plant(
                    9,
                    "Bird of Paradise",
                    6599,
                    "/images/birdofparadise.jpg",
                    "Tropical plant with large paddle-shaped leaves and striking orange-blue flowers. Makes a bold statement piece.",
                ),
            ],
        )
        .build()
}
