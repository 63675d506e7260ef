//! Inventory operations over an explicitly owned store + tracker.

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

use crate::command::{AddProduct, AdjustQuantity, InventoryCommand, RemoveProduct};
use crate::config::{InventoryConfig, NegativeStockPolicy};
use crate::notify::{NotificationSink, TracingSink};
use crate::product::Product;
use crate::sort::sorted_by_quantity;
use crate::store::InventoryStore;
use crate::tracker::LowStockTracker;
use crate::view::{DisplayRow, InventoryView};

/// Owns the inventory state and keeps store and low-stock tracker consistent.
///
/// Every mutating operation validates first, then mutates, then reconciles the
/// tracker and raises a low-stock alert through the sink if anything is low.
/// A failed operation leaves the state exactly as it was.
pub struct InventoryService {
    config: InventoryConfig,
    store: InventoryStore,
    tracker: LowStockTracker,
    sink: Box<dyn NotificationSink>,
}

impl core::fmt::Debug for InventoryService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InventoryService")
            .field("config", &self.config)
            .field("store", &self.store)
            .field("tracker", &self.tracker)
            .finish_non_exhaustive()
    }
}

impl Default for InventoryService {
    fn default() -> Self {
        Self::new(TracingSink)
    }
}

impl InventoryService {
    /// Service with the default configuration (threshold 10, negative stock allowed).
    pub fn new(sink: impl NotificationSink + 'static) -> Self {
        Self::with_config(InventoryConfig::default(), sink)
    }

    pub fn with_config(config: InventoryConfig, sink: impl NotificationSink + 'static) -> Self {
        Self {
            config,
            store: InventoryStore::new(),
            tracker: LowStockTracker::new(config.low_stock_threshold),
            sink: Box::new(sink),
        }
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    pub fn threshold(&self) -> i64 {
        self.tracker.threshold()
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn tracker(&self) -> &LowStockTracker {
        &self.tracker
    }

    /// Dispatch a command to the matching operation.
    pub fn execute(&mut self, command: InventoryCommand) -> DomainResult<()> {
        match command {
            InventoryCommand::AddProduct(cmd) => self.add_product(cmd),
            InventoryCommand::RemoveProduct(RemoveProduct { id }) => {
                self.remove_product(&id).map(|_| ())
            }
            InventoryCommand::AdjustQuantity(AdjustQuantity { id, delta }) => {
                self.update_quantity(&id, delta).map(|_| ())
            }
        }
    }

    /// Add a new product.
    ///
    /// Fails with `Validation` for a blank id or name (or a negative quantity when
    /// negative stock is rejected) and with `DuplicateId` if the id is taken.
    pub fn add_product(&mut self, cmd: AddProduct) -> DomainResult<()> {
        let id = ProductId::parse(&cmd.id)?;
        if self.config.negative_stock == NegativeStockPolicy::Reject && cmd.quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        let product = Product::new(id, cmd.name, cmd.quantity, cmd.expiry_date)?;

        let id = product.id().clone();
        self.store.insert(product)?;
        let stored = self.store.get(id.as_str())?;
        self.tracker.reconcile(stored);

        self.notify();
        Ok(())
    }

    /// Remove a product by id, returning it.
    pub fn remove_product(&mut self, id: &str) -> DomainResult<Product> {
        if id.trim().is_empty() {
            return Err(DomainError::validation("product id cannot be empty"));
        }
        let removed = self.store.remove(id.trim())?;
        self.tracker.forget(removed.id().as_str());

        self.notify();
        Ok(removed)
    }

    /// Add `delta` (may be negative) to a product's quantity, returning the new quantity.
    pub fn update_quantity(&mut self, id: &str, delta: i64) -> DomainResult<i64> {
        let policy = self.config.negative_stock;
        let product = self.store.get_mut(id.trim())?;

        let quantity = product.adjusted_quantity(delta)?;
        if policy == NegativeStockPolicy::Reject && quantity < 0 {
            return Err(DomainError::invariant(format!(
                "stock cannot go negative ({} {delta:+} = {quantity})",
                product.quantity()
            )));
        }

        product.set_quantity(quantity);
        self.tracker.reconcile(product);

        self.notify();
        Ok(quantity)
    }

    /// Adjust the first product (in store order) with this exact name.
    pub fn adjust_quantity_by_name(&mut self, name: &str, delta: i64) -> DomainResult<i64> {
        let id = self
            .store
            .find_by_name(name)
            .map(|p| p.id().clone())
            .ok_or_else(|| DomainError::not_found(name))?;
        self.update_quantity(id.as_str(), delta)
    }

    pub fn get(&self, id: &str) -> DomainResult<&Product> {
        self.store.get(id)
    }

    /// All products in insertion order.
    pub fn list_all(&self) -> impl Iterator<Item = &Product> + '_ {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Product names in store order (e.g. for a picker).
    pub fn product_names(&self) -> Vec<&str> {
        self.store.iter().map(Product::name).collect()
    }

    /// Low-stock products in the order they went low.
    pub fn low_stock(&self) -> Vec<&Product> {
        self.tracker
            .iter()
            .filter_map(|id| self.store.get(id.as_str()).ok())
            .collect()
    }

    /// Alert text the next [`notify`](Self::notify) would emit, if anything is low.
    pub fn low_stock_message(&self) -> Option<String> {
        let low = self.low_stock();
        if low.is_empty() {
            return None;
        }
        let names: Vec<&str> = low.iter().map(|p| p.name()).collect();
        Some(format!(
            "The following items are low on stock: {}",
            names.join(", ")
        ))
    }

    /// Send one alert listing every low-stock product, if there are any.
    pub fn notify(&self) {
        if let Some(message) = self.low_stock_message() {
            self.sink.warn(&message);
        }
    }

    /// Sorted view for display; storage order is left alone.
    pub fn sorted_for_display(&self) -> Vec<DisplayRow<'_>> {
        let threshold = self.threshold();
        sorted_by_quantity(self.store.iter())
            .into_iter()
            .map(|product| DisplayRow {
                product,
                low_stock: product.is_below(threshold),
            })
            .collect()
    }

    pub fn render(&self, view: &mut dyn InventoryView) {
        view.render(&self.sorted_for_display());
    }

    /// Drop all products and tracked state.
    pub fn reset(&mut self) {
        self.store.clear();
        self.tracker.clear();
    }
}
