//! Rendering seam: what a presentation layer receives to draw the inventory.

use serde::Serialize;

use crate::product::Product;

/// One line of the display list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayRow<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    /// Quantity is under the low-stock threshold (highlight this row).
    pub low_stock: bool,
}

/// Callback implemented by the presentation layer.
pub trait InventoryView {
    /// Draw `rows`, already sorted ascending by quantity.
    fn render(&mut self, rows: &[DisplayRow<'_>]);
}
