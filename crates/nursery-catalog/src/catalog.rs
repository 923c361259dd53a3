//! Category-ordered catalog
//!
//! Provides [`Catalog`], an immutable mapping from category name to items,
//! and [`CatalogBuilder`] which validates it.
//!
//! Lookup goes through a precomputed id index. The index is built from a
//! first-match scan, so its answers agree with scanning categories in order.

use crate::error::CatalogError;
use crate::item::{Item, ItemId};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Immutable catalog of items grouped by category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Category name -> items, in construction order
    categories: IndexMap<String, Vec<Item>>,

    /// id -> (category index, item index)
    index: HashMap<ItemId, (usize, usize)>,
}

impl Catalog {
    /// Start building a catalog
    #[inline]
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// Catalog with no categories
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self {
            categories: IndexMap::new(),
            index: HashMap::new(),
        }
    }

    /// Find item by id
    #[must_use]
    pub fn lookup_by_id(&self, id: ItemId) -> Option<&Item> {
        let &(cat, pos) = self.index.get(&id)?;
        self.categories.get_index(cat).map(|(_, items)| &items[pos])
    }

    /// Check if id resolves
    #[inline]
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    /// Categories in construction order
    pub fn categories(&self) -> impl ExactSizeIterator<Item = (&str, &[Item])> {
        self.categories
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    /// Items of one category
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&[Item]> {
        self.categories.get(name).map(Vec::as_slice)
    }

    /// Category holding an item
    #[must_use]
    pub fn category_of(&self, id: ItemId) -> Option<&str> {
        let &(cat, _) = self.index.get(&id)?;
        self.categories.get_index(cat).map(|(name, _)| name.as_str())
    }

    /// All items in display order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.categories.values().flatten()
    }

    /// Number of categories
    #[inline]
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total item count
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Check if catalog has no items
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

/// Builder that validates a catalog before freezing it
#[derive(Debug, Default, Clone)]
pub struct CatalogBuilder {
    categories: Vec<(String, Vec<Item>)>,
}

impl CatalogBuilder {
    /// Create empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category with its items
    #[must_use]
    pub fn category(mut self, name: impl Into<String>, items: impl IntoIterator<Item = Item>) -> Self {
        self.categories
            .push((name.into(), items.into_iter().collect()));
        self
    }

    /// Validate and freeze
    ///
    /// # Errors
    /// Returns the first violation found, scanning categories and items
    /// in order: blank or repeated category names, zero ids, empty names,
    /// non-positive prices, and ids reused anywhere in the catalog.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut categories: IndexMap<String, Vec<Item>> = IndexMap::with_capacity(self.categories.len());
        let mut index = HashMap::new();

        for (cat_idx, (name, items)) in self.categories.into_iter().enumerate() {
            if name.trim().is_empty() {
                return Err(CatalogError::EmptyCategoryName);
            }
            if categories.contains_key(&name) {
                return Err(CatalogError::DuplicateCategory(name));
            }

            for (pos, item) in items.iter().enumerate() {
                validate_item(item)?;
                if let Some(&(first_cat, _)) = index.get(&item.id) {
                    let first = categories
                        .get_index(first_cat)
                        .map(|(n, _)| n.clone())
                        .unwrap_or_else(|| name.clone());
                    return Err(CatalogError::DuplicateId {
                        id: item.id,
                        first,
                        second: name,
                    });
                }
                index.insert(item.id, (cat_idx, pos));
            }

            categories.insert(name, items);
        }

        tracing::debug!(
            categories = categories.len(),
            items = index.len(),
            "catalog built"
        );

        Ok(Catalog { categories, index })
    }
}

fn validate_item(item: &Item) -> Result<(), CatalogError> {
    if item.id.get() == 0 {
        return Err(CatalogError::ZeroId {
            name: item.name.clone(),
        });
    }
    if item.name.trim().is_empty() {
        return Err(CatalogError::EmptyName { id: item.id });
    }
    if item.price <= Decimal::ZERO {
        return Err(CatalogError::NonPositivePrice {
            id: item.id,
            price: item.price,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(id: u32, name: &str, cents: i64) -> Item {
        Item::new(id, name, Decimal::new(cents, 2))
    }

    fn two_category_catalog() -> Catalog {
        Catalog::builder()
            .category("Herbs", [item(1, "Basil", 499), item(2, "Mint", 399)])
            .category("Trees", [item(10, "Olive", 12_000)])
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_finds_across_categories() {
        let catalog = two_category_catalog();
        assert_eq!(catalog.lookup_by_id(ItemId(2)).unwrap().name, "Mint");
        assert_eq!(catalog.lookup_by_id(ItemId(10)).unwrap().name, "Olive");
        assert!(catalog.lookup_by_id(ItemId(3)).is_none());
        assert!(catalog.lookup_by_id(ItemId(0)).is_none());
    }

    #[test]
    fn categories_keep_construction_order() {
        let catalog = Catalog::builder()
            .category("Zebra", [item(1, "Z", 100)])
            .category("Alpha", [item(2, "A", 100)])
            .category("Middle", [item(3, "M", 100)])
            .build()
            .unwrap();

        let names: Vec<&str> = catalog.categories().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zebra", "Alpha", "Middle"]);
    }

    #[test]
    fn items_flatten_in_display_order() {
        let catalog = two_category_catalog();
        let ids: Vec<u32> = catalog.items().map(|i| i.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 10]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.category_count(), 2);
    }

    #[test]
    fn category_of_reports_owner() {
        let catalog = two_category_catalog();
        assert_eq!(catalog.category_of(ItemId(10)), Some("Trees"));
        assert_eq!(catalog.category_of(ItemId(99)), None);
        assert_eq!(catalog.category("Herbs").map(<[Item]>::len), Some(2));
    }

    #[test]
    fn rejects_duplicate_id_across_categories() {
        let err = Catalog::builder()
            .category("Herbs", [item(1, "Basil", 499)])
            .category("Trees", [item(1, "Olive", 12_000)])
            .build()
            .unwrap_err();

        match err {
            CatalogError::DuplicateId { id, first, second } => {
                assert_eq!(id, ItemId(1));
                assert_eq!(first, "Herbs");
                assert_eq!(second, "Trees");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_id_within_category() {
        let err = Catalog::builder()
            .category("Herbs", [item(1, "Basil", 499), item(1, "Mint", 399)])
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { .. }));
    }

    #[test]
    fn rejects_invalid_items() {
        let zero = Catalog::builder().category("C", [item(0, "Nil", 100)]).build();
        assert!(matches!(zero, Err(CatalogError::ZeroId { .. })));

        let blank = Catalog::builder().category("C", [item(1, "  ", 100)]).build();
        assert!(matches!(blank, Err(CatalogError::EmptyName { .. })));

        let free = Catalog::builder().category("C", [item(1, "Free", 0)]).build();
        assert!(matches!(free, Err(CatalogError::NonPositivePrice { .. })));
    }

    #[test]
    fn rejects_bad_categories() {
        let dup = Catalog::builder()
            .category("C", [item(1, "A", 100)])
            .category("C", [item(2, "B", 100)])
            .build();
        assert!(matches!(dup, Err(CatalogError::DuplicateCategory(name)) if name == "C"));

        let blank = Catalog::builder().category("", [item(1, "A", 100)]).build();
        assert!(matches!(blank, Err(CatalogError::EmptyCategoryName)));
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::builder().build().unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog, Catalog::default());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_index_agrees_with_scan(
                sizes in proptest::collection::vec(0usize..5, 1..5),
                probe in 0u32..30,
            ) {
                let mut next = 1u32;
                let mut builder = Catalog::builder();
                for (c, size) in sizes.iter().enumerate() {
                    let items: Vec<Item> = (0..*size)
                        .map(|_| {
                            let id = next;
                            next += 1;
                            item(id, &format!("item-{id}"), 100)
                        })
                        .collect();
                    builder = builder.category(format!("cat-{c}"), items);
                }
                let catalog = builder.build().unwrap();

                let scanned = catalog
                    .categories()
                    .find_map(|(_, items)| items.iter().find(|i| i.id == ItemId(probe)));
                prop_assert_eq!(catalog.lookup_by_id(ItemId(probe)), scanned);
            }
        }
    }
}
