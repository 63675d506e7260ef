//! Shell configuration from the environment.

use stockroom_inventory::{InventoryConfig, NegativeStockPolicy};
use thiserror::Error;

pub const THRESHOLD_ENV: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";
pub const NEGATIVE_STOCK_ENV: &str = "STOCKROOM_NEGATIVE_STOCK";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an integer, got {value:?}")]
    InvalidThreshold { var: &'static str, value: String },

    #[error("{var} must be \"allow\" or \"reject\", got {value:?}")]
    InvalidNegativeStock { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellConfig {
    pub inventory: InventoryConfig,
}

impl ShellConfig {
    /// Load from process environment; unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut inventory = InventoryConfig::default();

        if let Some(raw) = lookup(THRESHOLD_ENV) {
            inventory.low_stock_threshold =
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidThreshold {
                        var: THRESHOLD_ENV,
                        value: raw.clone(),
                    })?;
        }

        if let Some(raw) = lookup(NEGATIVE_STOCK_ENV) {
            inventory.negative_stock = match raw.trim().to_ascii_lowercase().as_str() {
                "allow" => NegativeStockPolicy::Allow,
                "reject" => NegativeStockPolicy::Reject,
                _ => {
                    return Err(ConfigError::InvalidNegativeStock {
                        var: NEGATIVE_STOCK_ENV,
                        value: raw,
                    });
                }
            };
        }

        Ok(Self { inventory })
    }
}
