//! Testing utilities for the Paradise Nursery workspace
//!
//! Shared fixtures, recorders and money helpers.

#![allow(missing_docs)]

use nursery_catalog::{Catalog, Item, ItemId};
use nursery_core::{StoreChange, Storefront};
use rust_decimal::Decimal;
use std::cell::RefCell;
use std::rc::Rc;

pub const AFRICAN_VIOLET: ItemId = ItemId(1);
pub const ALOE_VERA: ItemId = ItemId(2);
pub const MONSTERA: ItemId = ItemId(6);
pub const BIRD_OF_PARADISE: ItemId = ItemId(9);
pub const NOT_IN_CATALOG: ItemId = ItemId(999);

pub fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

/// Two-category catalog with round prices
pub fn small_catalog() -> Catalog {
    Catalog::builder()
        .category(
            "Herbs",
            [
                Item::new(1, "Basil", cents(500)).with_image("/images/basil.jpg"),
                Item::new(2, "Mint", cents(250)),
            ],
        )
        .category("Trees", [Item::new(3, "Olive", cents(12_000))])
        .build()
        .unwrap()
}

/// Session over the house catalog with two Aloe Vera and one Monstera
pub fn seeded_storefront() -> Storefront {
    let mut store = Storefront::paradise_nursery();
    store.set_quantity(ALOE_VERA, 2);
    store.add_one(MONSTERA);
    store
}

/// Collects every published change
#[derive(Debug, Clone, Default)]
pub struct ChangeRecorder {
    changes: Rc<RefCell<Vec<StoreChange>>>,
}

impl ChangeRecorder {
    pub fn attach(store: &mut Storefront) -> Self {
        let recorder = Self::default();
        let sink = Rc::clone(&recorder.changes);
        store.subscribe(move |change, _| sink.borrow_mut().push(*change));
        recorder
    }

    pub fn changes(&self) -> Vec<StoreChange> {
        self.changes.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.changes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.borrow().is_empty()
    }
}
