use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

/// A product on the stockroom shelf.
///
/// `id` is fixed at creation. `quantity` changes only through
/// [`InventoryService::update_quantity`](crate::InventoryService::update_quantity);
/// `expiry_date` is informational and never consulted by inventory logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    quantity: i64,
    expiry_date: Option<String>,
}

impl Product {
    /// Build a product from already-validated parts.
    ///
    /// The name must be non-blank; a blank expiry date is treated as absent.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        quantity: i64,
        expiry_date: Option<String>,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let expiry_date = expiry_date
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            id,
            name: name.trim().to_string(),
            quantity,
            expiry_date,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn expiry_date(&self) -> Option<&str> {
        self.expiry_date.as_deref()
    }

    /// Whether this product is under `threshold`.
    pub fn is_below(&self, threshold: i64) -> bool {
        self.quantity < threshold
    }

    /// Quantity after applying `delta`, or a validation error on overflow.
    pub(crate) fn adjusted_quantity(&self, delta: i64) -> DomainResult<i64> {
        self.quantity.checked_add(delta).ok_or_else(|| {
            DomainError::validation(format!(
                "quantity change {delta} overflows current quantity {}",
                self.quantity
            ))
        })
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {} left. ", self.name, self.quantity)?;
        match &self.expiry_date {
            Some(date) => write!(f, "Expires on: {date}"),
            None => f.write_str("No expiry date"),
        }
    }
}
