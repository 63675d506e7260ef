//! Inventory policy knobs.

use serde::{Deserialize, Serialize};
use stockroom_core::ValueObject;

use crate::tracker::LOW_STOCK_THRESHOLD;

/// What to do when an adjustment would push a quantity below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeStockPolicy {
    /// No floor: quantities may go negative.
    #[default]
    Allow,
    /// Reject the operation; state is left unchanged.
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    pub low_stock_threshold: i64,
    pub negative_stock: NegativeStockPolicy,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: LOW_STOCK_THRESHOLD,
            negative_stock: NegativeStockPolicy::Allow,
        }
    }
}

impl ValueObject for InventoryConfig {}
impl ValueObject for NegativeStockPolicy {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_behaviour() {
        let config = InventoryConfig::default();
        assert_eq!(config.low_stock_threshold, 10);
        assert_eq!(config.negative_stock, NegativeStockPolicy::Allow);
    }

    #[test]
    fn policy_serializes_lowercase() {
        let json = serde_json::to_string(&NegativeStockPolicy::Reject).unwrap();
        assert_eq!(json, "\"reject\"");
    }
}
