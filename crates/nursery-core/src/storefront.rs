//! Storefront session
//!
//! Provides [`Storefront`], the single owner of catalog, cart and view
//! state for one session. Consumers get it by reference; there is no
//! ambient global state.
//!
//! Every action runs to completion before the next one is accepted. An
//! action that changes state publishes exactly one [`StoreChange`] to all
//! subscribers, synchronously, before `dispatch` returns.

use crate::action::{Action, Outcome};
use crate::checkout::CheckoutAcknowledgement;
use crate::config::StorefrontConfig;
use crate::error::StorefrontError;
use crate::notify::{Snapshot, StoreChange, Subscribers, SubscriptionId};
use crate::view::{Navigation, View, ViewController};
use nursery_cart::{CartChange, CartStore, LineItem};
use nursery_catalog::{Catalog, ItemId};
use rust_decimal::Decimal;
use std::sync::Arc;

/// One storefront session
#[derive(Debug)]
pub struct Storefront {
    config: StorefrontConfig,
    catalog: Arc<Catalog>,
    cart: CartStore,
    views: ViewController,
    subscribers: Subscribers,
}

impl Storefront {
    /// Session over a catalog with default configuration
    #[must_use]
    pub fn new(catalog: impl Into<Arc<Catalog>>) -> Self {
        Self::with_config(StorefrontConfig::default(), catalog)
    }

    /// Session over a catalog with explicit configuration
    #[must_use]
    pub fn with_config(config: StorefrontConfig, catalog: impl Into<Arc<Catalog>>) -> Self {
        let catalog = catalog.into();
        tracing::info!(
            store = %config.store_name,
            categories = catalog.category_count(),
            items = catalog.len(),
            "storefront session started"
        );
        Self {
            config,
            catalog,
            cart: CartStore::new(),
            views: ViewController::new(),
            subscribers: Subscribers::default(),
        }
    }

    /// Session built from configuration, loading its catalog
    ///
    /// # Errors
    /// Returns catalog load or validation errors
    pub fn from_config(config: StorefrontConfig) -> Result<Self, StorefrontError> {
        let catalog = config.load_catalog()?;
        Ok(Self::with_config(config, catalog))
    }

    /// Session over the bundled catalog
    #[must_use]
    pub fn paradise_nursery() -> Self {
        Self::new(Catalog::paradise_nursery())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Catalog
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Shared handle to the catalog
    #[inline]
    #[must_use]
    pub fn catalog_handle(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Cart
    #[inline]
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Active view
    #[inline]
    #[must_use]
    pub fn view(&self) -> View {
        self.views.current()
    }

    // ------------------------------------------------------------------
    // Derived state
    // ------------------------------------------------------------------

    /// Sum of stored quantities
    #[inline]
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }

    /// Rounded cost of resolvable entries
    #[inline]
    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        self.cart.total_cost(&self.catalog)
    }

    /// Resolved cart lines
    #[inline]
    #[must_use]
    pub fn line_items(&self) -> Vec<LineItem<'_>> {
        self.cart.line_items(&self.catalog)
    }

    /// Navigation badge count; hidden when the cart is empty
    #[inline]
    #[must_use]
    pub fn badge(&self) -> Option<u64> {
        Some(self.total_quantity()).filter(|&n| n > 0)
    }

    /// Render projection of the current state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            view: self.view(),
            cart: self.cart.summary(&self.catalog),
            badge: self.badge(),
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add one unit of an item
    pub fn add_one(&mut self, id: ItemId) -> Option<CartChange> {
        let change = self.cart.add_one(id);
        self.publish_cart(change)
    }

    /// Set an absolute quantity; `<= 0` removes
    pub fn set_quantity(&mut self, id: ItemId, quantity: i64) -> Option<CartChange> {
        let change = self.cart.set_quantity(id, quantity);
        self.publish_cart(change)
    }

    /// Remove an entry
    pub fn remove_entry(&mut self, id: ItemId) -> Option<CartChange> {
        let change = self.cart.remove_entry(id);
        self.publish_cart(change)
    }

    /// Quantity + 1
    pub fn increment(&mut self, id: ItemId) -> Option<CartChange> {
        let change = self.cart.increment(id);
        self.publish_cart(change)
    }

    /// Quantity - 1
    pub fn decrement(&mut self, id: ItemId) -> Option<CartChange> {
        let change = self.cart.decrement(id);
        self.publish_cart(change)
    }

    /// Switch screens
    pub fn navigate_to(&mut self, view: View) -> Option<Navigation> {
        let navigation = self.views.navigate_to(view)?;
        self.publish(StoreChange::View(navigation));
        Some(navigation)
    }

    /// Acknowledge checkout without touching state
    #[must_use]
    pub fn checkout(&self) -> CheckoutAcknowledgement {
        let ack = CheckoutAcknowledgement {
            message: self.config.checkout_text(),
            total_quantity: self.total_quantity(),
            total_cost: self.total_cost(),
        };
        tracing::info!(items = ack.total_quantity, total = %ack.total_cost, "checkout acknowledged");
        ack
    }

    /// Apply one action
    pub fn dispatch(&mut self, action: Action) -> Outcome {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::AddOne { id } => self.add_one(id).map(StoreChange::Cart).into(),
            Action::SetQuantity { id, quantity } => {
                self.set_quantity(id, quantity).map(StoreChange::Cart).into()
            }
            Action::Increment { id } => self.increment(id).map(StoreChange::Cart).into(),
            Action::Decrement { id } => self.decrement(id).map(StoreChange::Cart).into(),
            Action::Remove { id } => self.remove_entry(id).map(StoreChange::Cart).into(),
            Action::Navigate { to } => self.navigate_to(to).map(StoreChange::View).into(),
            Action::Checkout => Outcome::CheckedOut(self.checkout()),
        }
    }

    /// Apply actions in order
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> Vec<Outcome> {
        actions.into_iter().map(|a| self.dispatch(a)).collect()
    }

    // ------------------------------------------------------------------
    // Subscriptions
    // ------------------------------------------------------------------

    /// Register a change callback
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&StoreChange, &Snapshot) + 'static,
    {
        self.subscribers.add(Box::new(callback))
    }

    /// Drop a callback; `false` if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    /// Number of registered callbacks
    #[inline]
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn publish_cart(&mut self, change: Option<CartChange>) -> Option<CartChange> {
        if let Some(change) = change {
            self.publish(StoreChange::Cart(change));
        }
        change
    }

    fn publish(&mut self, change: StoreChange) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.subscribers.publish(&change, &snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    const ALOE: ItemId = ItemId(2);

    fn recorder(store: &mut Storefront) -> Rc<RefCell<Vec<(StoreChange, Snapshot)>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        store.subscribe(move |change, snapshot| {
            sink.borrow_mut().push((*change, snapshot.clone()));
        });
        log
    }

    #[test]
    fn starts_home_and_empty() {
        let store = Storefront::paradise_nursery();
        assert_eq!(store.view(), View::Home);
        assert!(store.cart().is_empty());
        assert_eq!(store.badge(), None);
        assert_eq!(store.catalog().len(), 9);
    }

    #[test]
    fn aloe_vera_scenario_through_dispatch() {
        let mut store = Storefront::paradise_nursery();

        store.dispatch(Action::AddOne { id: ALOE });
        store.dispatch(Action::AddOne { id: ALOE });
        assert_eq!(store.total_quantity(), 2);
        assert_eq!(store.total_cost(), Decimal::new(3798, 2));

        store.dispatch(Action::SetQuantity { id: ALOE, quantity: 5 });
        assert_eq!(store.total_quantity(), 5);
        assert_eq!(store.total_cost(), Decimal::new(9495, 2));

        store.dispatch(Action::Remove { id: ALOE });
        assert!(store.line_items().is_empty());
        assert_eq!(store.total_quantity(), 0);
        assert_eq!(store.total_cost(), Decimal::new(0, 2));
    }

    #[test]
    fn navigation_does_not_touch_cart() {
        let mut store = Storefront::paradise_nursery();
        store.add_one(ALOE);
        let cart_before = store.cart().clone();

        for to in [View::Browse, View::Cart, View::Home] {
            store.dispatch(Action::Navigate { to });
        }

        assert_eq!(store.view(), View::Home);
        assert_eq!(store.cart(), &cart_before);
    }

    #[test]
    fn subscribers_see_each_change_with_fresh_snapshot() {
        let mut store = Storefront::paradise_nursery();
        let log = recorder(&mut store);

        store.add_one(ALOE);
        store.navigate_to(View::Cart);

        let log = log.borrow();
        assert_eq!(log.len(), 2);

        let (change, snapshot) = &log[0];
        assert_eq!(*change, StoreChange::Cart(CartChange::Added { id: ALOE, quantity: 1 }));
        assert_eq!(snapshot.badge, Some(1));
        assert_eq!(snapshot.cart.total_cost, Decimal::new(1899, 2));
        assert_eq!(snapshot.view, View::Home);

        let (change, snapshot) = &log[1];
        assert_eq!(
            *change,
            StoreChange::View(Navigation { from: View::Home, to: View::Cart })
        );
        assert_eq!(snapshot.view, View::Cart);
    }

    #[test]
    fn noops_publish_nothing() {
        let mut store = Storefront::paradise_nursery();
        let log = recorder(&mut store);

        assert_eq!(store.dispatch(Action::Remove { id: ALOE }), Outcome::Unchanged);
        assert_eq!(store.dispatch(Action::Navigate { to: View::Home }), Outcome::Unchanged);
        assert_eq!(store.dispatch(Action::Decrement { id: ALOE }), Outcome::Unchanged);

        store.set_quantity(ALOE, 3);
        store.set_quantity(ALOE, 3);

        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let mut store = Storefront::paradise_nursery();
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);
        let id = store.subscribe(move |_, _| *sink.borrow_mut() += 1);

        store.add_one(ALOE);
        assert!(store.unsubscribe(id));
        store.add_one(ALOE);

        assert_eq!(*count.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn checkout_acknowledges_without_mutation() {
        let mut store = Storefront::paradise_nursery();
        let log = recorder(&mut store);
        store.set_quantity(ALOE, 2);
        store.navigate_to(View::Cart);
        let before = store.snapshot();

        let ack = match store.dispatch(Action::Checkout) {
            Outcome::CheckedOut(ack) => ack,
            other => panic!("expected checkout outcome, got {other:?}"),
        };

        assert!(ack.message.contains("Paradise Nursery"));
        assert_eq!(ack.total_quantity, 2);
        assert_eq!(ack.total_cost, Decimal::new(3798, 2));
        assert_eq!(store.snapshot(), before);
        assert_eq!(log.borrow().len(), 2);
    }

    #[test]
    fn unknown_ids_are_lenient() {
        let mut store = Storefront::paradise_nursery();
        let outcome = store.dispatch(Action::AddOne { id: ItemId(999) });

        assert!(outcome.is_change());
        assert_eq!(store.total_quantity(), 1);
        assert_eq!(store.total_cost(), Decimal::ZERO);
        assert!(store.line_items().is_empty());
        assert_eq!(store.badge(), Some(1));
    }

    #[test]
    fn dispatch_all_preserves_order() {
        let mut store = Storefront::paradise_nursery();
        let outcomes = store.dispatch_all([
            Action::SetQuantity { id: ALOE, quantity: 4 },
            Action::Decrement { id: ALOE },
            Action::Increment { id: ItemId(6) },
            Action::Remove { id: ItemId(6) },
            Action::Remove { id: ItemId(6) },
        ]);

        assert_eq!(outcomes.len(), 5);
        assert_eq!(outcomes[4], Outcome::Unchanged);
        assert_eq!(store.cart().quantity_of(ALOE), 3);
        assert_eq!(store.cart().distinct_items(), 1);
    }

    #[test]
    fn custom_config_flows_into_checkout() {
        let config = StorefrontConfig::new().with_store_name("Fern Hollow");
        let store = Storefront::with_config(config, Catalog::paradise_nursery());
        assert!(store.checkout().message.contains("Fern Hollow"));
        assert_eq!(store.config().store_name, "Fern Hollow");
    }

    #[test]
    fn shared_catalog_handle() {
        let catalog = Arc::new(Catalog::paradise_nursery());
        let store = Storefront::new(Arc::clone(&catalog));
        assert!(Arc::ptr_eq(&store.catalog_handle(), &catalog));
    }
}
