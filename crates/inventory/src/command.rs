use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

/// Command: AddProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProduct {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    #[serde(default)]
    pub expiry_date: Option<String>,
}

impl AddProduct {
    pub fn new(id: impl Into<String>, name: impl Into<String>, quantity: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            expiry_date: None,
        }
    }

    pub fn with_expiry(mut self, expiry_date: impl Into<String>) -> Self {
        self.expiry_date = Some(expiry_date.into());
        self
    }
}

/// Command: RemoveProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveProduct {
    pub id: String,
}

/// Command: AdjustQuantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustQuantity {
    pub id: String,
    pub delta: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum InventoryCommand {
    AddProduct(AddProduct),
    RemoveProduct(RemoveProduct),
    AdjustQuantity(AdjustQuantity),
}

impl InventoryCommand {
    pub fn name(&self) -> &'static str {
        match self {
            InventoryCommand::AddProduct(_) => "inventory.product.add",
            InventoryCommand::RemoveProduct(_) => "inventory.product.remove",
            InventoryCommand::AdjustQuantity(_) => "inventory.product.adjust_quantity",
        }
    }
}

/// Parse a quantity typed by a user.
pub fn parse_quantity(raw: &str) -> DomainResult<i64> {
    parse_integer(raw, "quantity")
}

/// Parse a (possibly negative) quantity change typed by a user.
pub fn parse_delta(raw: &str) -> DomainResult<i64> {
    parse_integer(raw, "quantity change")
}

fn parse_integer(raw: &str, what: &str) -> DomainResult<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{what} is required")));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| DomainError::validation(format!("{what} must be a whole number, got {trimmed:?}")))
}
