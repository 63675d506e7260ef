//! Low-stock tracking.

use stockroom_core::{Entity, ProductId};

use crate::product::Product;

/// Default low-stock threshold: quantities strictly below this are "low".
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Queue of products currently under the threshold, in the order they went low.
///
/// Holds ids only; the store owns the products. Callers keep the tracker in sync by
/// calling [`reconcile`](Self::reconcile) after every quantity change and
/// [`forget`](Self::forget) on removal.
#[derive(Debug, Clone)]
pub struct LowStockTracker {
    threshold: i64,
    tracked: Vec<ProductId>,
}

impl Default for LowStockTracker {
    fn default() -> Self {
        Self::new(LOW_STOCK_THRESHOLD)
    }
}

impl LowStockTracker {
    pub fn new(threshold: i64) -> Self {
        Self {
            threshold,
            tracked: Vec::new(),
        }
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Bring membership of `product` in line with its current quantity.
    ///
    /// Returns `true` if membership changed.
    pub fn reconcile(&mut self, product: &Product) -> bool {
        let id = product.id();
        let tracked = self.contains(id.as_str());

        if product.is_below(self.threshold) && !tracked {
            self.tracked.push(id.clone());
            true
        } else if !product.is_below(self.threshold) && tracked {
            self.forget(id.as_str())
        } else {
            false
        }
    }

    /// Drop `id` if tracked. Returns `true` if it was.
    pub fn forget(&mut self, id: &str) -> bool {
        let before = self.tracked.len();
        self.tracked.retain(|tracked| tracked.as_str() != id);
        self.tracked.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tracked.iter().any(|tracked| tracked.as_str() == id)
    }

    /// Tracked ids in tracker order.
    pub fn iter(&self) -> impl Iterator<Item = &ProductId> + '_ {
        self.tracked.iter()
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    pub fn clear(&mut self) {
        self.tracked.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, quantity: i64) -> Product {
        Product::new(ProductId::parse(id).unwrap(), "Item", quantity, None).unwrap()
    }

    #[test]
    fn reconcile_tracks_only_below_threshold() {
        let mut tracker = LowStockTracker::default();

        assert!(!tracker.reconcile(&product("a", 10)));
        assert!(tracker.is_empty());

        assert!(tracker.reconcile(&product("b", 9)));
        assert!(tracker.contains("b"));
    }

    #[test]
    fn reconcile_is_idempotent() {
        let mut tracker = LowStockTracker::default();
        let low = product("a", 1);

        assert!(tracker.reconcile(&low));
        assert!(!tracker.reconcile(&low));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn reconcile_drops_recovered_product() {
        let mut tracker = LowStockTracker::default();
        tracker.reconcile(&product("a", 5));
        assert!(tracker.reconcile(&product("a", 25)));
        assert!(!tracker.contains("a"));
    }

    #[test]
    fn keeps_order_products_went_low() {
        let mut tracker = LowStockTracker::default();
        tracker.reconcile(&product("b", 1));
        tracker.reconcile(&product("a", 2));
        tracker.reconcile(&product("c", 3));

        let ids: Vec<_> = tracker.iter().map(ProductId::as_str).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn forget_absent_id_is_noop() {
        let mut tracker = LowStockTracker::default();
        assert!(!tracker.forget("missing"));
    }

    #[test]
    fn custom_threshold_is_respected() {
        let mut tracker = LowStockTracker::new(3);
        assert!(!tracker.reconcile(&product("a", 3)));
        assert!(tracker.reconcile(&product("b", 2)));
        assert_eq!(tracker.threshold(), 3);
    }
}
