//! Terminal rendering: a text table view and a stderr warning sink.

use std::fmt::Write as _;

use stockroom_core::Entity;
use stockroom_inventory::{DisplayRow, InventoryView, NotificationSink};

/// Renders rows into an in-memory text table; low-stock rows are flagged `!`.
#[derive(Debug, Default)]
pub struct TableView {
    output: String,
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of the most recent render.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

impl InventoryView for TableView {
    fn render(&mut self, rows: &[DisplayRow<'_>]) {
        self.output.clear();
        if rows.is_empty() {
            self.output.push_str("(no products)\n");
            return;
        }

        let id_width = rows
            .iter()
            .map(|r| r.product.id().as_str().len())
            .max()
            .unwrap_or(0)
            .max("ID".len());

        let _ = writeln!(self.output, "  {:<id_width$}  PRODUCT", "ID");
        for row in rows {
            let flag = if row.low_stock { '!' } else { ' ' };
            let _ = writeln!(
                self.output,
                "{flag} {:<id_width$}  {}",
                row.product.id().as_str(),
                row.product
            );
        }
    }
}

/// Prints alerts to stderr and records them as `tracing` warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn warn(&self, message: &str) {
        tracing::warn!(alert = %message, "low stock alert");
        eprintln!("WARNING: {message}");
    }
}
