//! The cart model: single owner of the visitor's cart.
//!
//! # Invariants
//!
//! - At most one [`LineItem`] per dish name (exact match).
//! - Every stored quantity is at least one.
//! - Insertion order is display order.
//!
//! Every mutation writes the whole cart through to the [`PersistentStore`]
//! before returning, then asks the [`CartRenderer`] to redraw and, where the
//! outcome is worth telling the visitor, reports it to the
//! [`NotificationSink`]. Failures are reported the same way; no operation
//! returns an error to its caller, and no failure leaves the in-memory cart
//! in a state that breaks the invariants.
//!
//! The in-memory cart is authoritative. If a write fails the durable copy
//! falls behind until the next successful mutation writes it again.

use rust_decimal::Decimal;
use tandoor_core::{DishName, NotificationLevel};
use tracing::{debug, error, instrument, warn};

use crate::codec;
use crate::error::{CartError, InvalidItem, StoreError};
use crate::notify::{CartRenderer, NotificationSink};
use crate::store::PersistentStore;

/// Storage key the cart is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "cart_items";

/// One distinct dish in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    name: DishName,
    unit_price: Decimal,
    quantity: u32,
}

impl LineItem {
    pub(crate) const fn new(name: DishName, unit_price: Decimal, quantity: u32) -> Self {
        Self {
            name,
            unit_price,
            quantity,
        }
    }

    /// Dish name; the line's identity within the cart.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Price of one unit, fixed by the first add.
    #[must_use]
    pub const fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Number of units, always at least one.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }

    pub(crate) const fn add_quantity(&mut self, extra: u32) {
        self.quantity = self.quantity.saturating_add(extra);
    }
}

fn sum_total(lines: &[LineItem]) -> Decimal {
    lines
        .iter()
        .fold(Decimal::ZERO, |acc, line| acc.saturating_add(line.line_total()))
}

fn sum_quantity(lines: &[LineItem]) -> u64 {
    lines.iter().map(|line| u64::from(line.quantity)).sum()
}

/// Immutable point-in-time copy of the cart, with derived totals.
///
/// Handed to renderers and to checkout. Holding a snapshot never observes
/// later mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSnapshot {
    lines: Vec<LineItem>,
    total: Decimal,
    item_count: u64,
}

impl CartSnapshot {
    fn new(lines: Vec<LineItem>) -> Self {
        let total = sum_total(&lines);
        let item_count = sum_quantity(&lines);
        Self {
            lines,
            total,
            item_count,
        }
    }

    /// Lines in display order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Sum of all line totals.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Sum of all quantities.
    #[must_use]
    pub const fn item_count(&self) -> u64 {
        self.item_count
    }

    /// Number of distinct dishes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A change written to the shared store by another tab or process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    /// Key that changed.
    pub key: String,
    /// New value, or `None` if the key was removed.
    pub new_value: Option<Vec<u8>>,
}

/// Which branch of add-item applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddOutcome {
    Added,
    Incremented,
}

/// The visitor's cart.
///
/// Construct one per session with [`CartModel::open`] and hand it to the
/// event layer; nothing else should hold the cart's lines.
pub struct CartModel<S> {
    store: S,
    key: String,
    lines: Vec<LineItem>,
    renderer: Box<dyn CartRenderer>,
    notifier: Box<dyn NotificationSink>,
}

impl<S: PersistentStore> CartModel<S> {
    /// Create an empty cart bound to `store` under `key` without reading it.
    ///
    /// Call [`initialize`](Self::initialize) to load the stored cart.
    pub fn new(
        store: S,
        key: impl Into<String>,
        renderer: impl CartRenderer + 'static,
        notifier: impl NotificationSink + 'static,
    ) -> Self {
        Self {
            store,
            key: key.into(),
            lines: Vec::new(),
            renderer: Box::new(renderer),
            notifier: Box::new(notifier),
        }
    }

    /// Create a cart and load it from `store`.
    pub fn open(
        store: S,
        key: impl Into<String>,
        renderer: impl CartRenderer + 'static,
        notifier: impl NotificationSink + 'static,
    ) -> Self {
        let mut cart = Self::new(store, key, renderer, notifier);
        cart.initialize();
        cart
    }

    /// Load the cart from the store and redraw.
    ///
    /// Missing or malformed data yields an empty cart. If the store cannot
    /// be read at all the current in-memory cart is kept and the visitor is
    /// warned. Safe to call repeatedly; each call re-reads the store.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn initialize(&mut self) {
        match self.store.get(&self.key) {
            Ok(Some(bytes)) => self.lines = self.decode_or_empty(&bytes),
            Ok(None) => self.lines.clear(),
            Err(e) => {
                let err = CartError::from(e);
                warn!(error = %err, "Could not read stored cart, keeping in-memory cart");
                self.report(&err);
            }
        }
        debug!(lines = self.lines.len(), "Cart initialized");
        self.render();
    }

    /// Replace the cart with a value written by another tab or process.
    ///
    /// Applies the same normalization as [`initialize`](Self::initialize).
    /// `None` means the key was removed and empties the cart. Redraws, but
    /// neither writes back nor notifies.
    #[instrument(skip_all, fields(key = %self.key))]
    pub fn resync(&mut self, external: Option<&[u8]>) {
        self.lines = external.map_or_else(Vec::new, |bytes| self.decode_or_empty(bytes));
        debug!(lines = self.lines.len(), "Cart resynchronized");
        self.render();
    }

    /// Apply a storage change notification if it concerns this cart's key.
    ///
    /// Returns `true` if the cart was resynchronized.
    pub fn handle_storage_event(&mut self, event: &StorageEvent) -> bool {
        if event.key != self.key {
            return false;
        }
        self.resync(event.new_value.as_deref());
        true
    }

    /// Add one unit of a dish.
    ///
    /// If the dish is already in the cart its quantity goes up by one and
    /// `unit_price` is ignored. Otherwise a new line with quantity one is
    /// appended. A blank name or a price that is negative or not
    /// representable as a decimal is reported as an error notification and changes nothing.
    pub fn add_item<P>(&mut self, name: &str, unit_price: P)
    where
        P: TryInto<Decimal>,
    {
        match self.try_add(name, unit_price.try_into().ok()) {
            Ok(outcome) => {
                self.persist();
                self.render();
                let message = match outcome {
                    AddOutcome::Added => format!("{name} added to cart!"),
                    AddOutcome::Incremented => format!("{name} quantity increased!"),
                };
                self.notify(&message, NotificationLevel::Success);
            }
            Err(invalid) => {
                debug!(name, reason = %invalid, "Rejected add-item request");
                self.report(&CartError::from(invalid));
            }
        }
    }

    fn try_add(&mut self, name: &str, unit_price: Option<Decimal>) -> Result<AddOutcome, InvalidItem> {
        let name = DishName::parse(name)?;
        let unit_price = unit_price.ok_or(InvalidItem::Unrepresentable)?;
        if unit_price < Decimal::ZERO {
            return Err(InvalidItem::Negative);
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.name == name) {
            line.add_quantity(1);
            debug!(name = %name, quantity = line.quantity, "Incremented cart line");
            return Ok(AddOutcome::Incremented);
        }

        debug!(name = %name, %unit_price, "Appended cart line");
        self.lines.push(LineItem::new(name, unit_price.normalize(), 1));
        Ok(AddOutcome::Added)
    }

    /// Remove the line for `name`. Absent names are ignored silently.
    pub fn remove_item(&mut self, name: &str) {
        let Some(index) = self.position(name) else {
            debug!(name, "Remove ignored, dish not in cart");
            return;
        };
        self.lines.remove(index);
        self.persist();
        self.render();
        self.notify(&format!("{name} removed from cart!"), NotificationLevel::Info);
    }

    /// Set the quantity of the line for `name`.
    ///
    /// Quantities below one are raised to one; this path never removes a
    /// line. Absent names are ignored. No notification is issued.
    pub fn update_quantity(&mut self, name: &str, quantity: i64) {
        let Some(index) = self.position(name) else {
            debug!(name, "Quantity update ignored, dish not in cart");
            return;
        };
        let clamped = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.get_mut(index) {
            line.quantity = clamped;
        }
        debug!(name, requested = quantity, quantity = clamped, "Updated cart line quantity");
        self.persist();
        self.render();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
        self.render();
        self.notify("Cart cleared!", NotificationLevel::Info);
    }

    /// Sum of `unit_price × quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        sum_total(&self.lines)
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        sum_quantity(&self.lines)
    }

    /// Owned copy of the current lines plus derived totals.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::new(self.lines.clone())
    }

    /// Number of distinct dishes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Quantity of `name`, if it is in the cart.
    #[must_use]
    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.position(name)
            .and_then(|index| self.lines.get(index))
            .map(LineItem::quantity)
    }

    /// Storage key this cart persists under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store, e.g. to change a quota.
    ///
    /// Writing the cart key through this handle bypasses the cart; call
    /// [`resync`](Self::resync) afterwards to pick the change up.
    pub const fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Send a message to the notification sink.
    pub(crate) fn notify(&self, message: &str, level: NotificationLevel) {
        self.notifier.notify(message, level);
    }

    /// Surface an error to the visitor.
    pub(crate) fn report(&self, err: &CartError) {
        self.notify(err.user_message(), err.level());
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.name() == name)
    }

    fn decode_or_empty(&self, bytes: &[u8]) -> Vec<LineItem> {
        codec::decode(bytes).unwrap_or_else(|e| {
            warn!(key = %self.key, error = %e, "Discarding malformed stored cart");
            Vec::new()
        })
    }

    fn render(&self) {
        self.renderer.render(&self.snapshot());
    }

    fn persist(&mut self) {
        if let Err(err) = self.write_through() {
            error!(key = %self.key, error = %err, "Failed to persist cart");
            self.report(&err);
        }
    }

    fn write_through(&mut self) -> Result<(), CartError> {
        let bytes = codec::encode(&self.lines).map_err(|source| StoreError::Encode {
            key: self.key.clone(),
            source,
        })?;
        self.store.set(&self.key, &bytes)?;
        Ok(())
    }
}
