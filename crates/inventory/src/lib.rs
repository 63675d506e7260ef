//! Inventory domain module.
//!
//! Products, the authoritative store, low-stock tracking and display ordering,
//! tied together by [`InventoryService`]. Pure in-memory logic: presentation is
//! reached only through the [`NotificationSink`] and [`InventoryView`] seams.

pub mod command;
pub mod config;
pub mod notify;
pub mod product;
pub mod service;
pub mod sort;
pub mod store;
pub mod tracker;
pub mod view;

pub use command::{
    AddProduct, AdjustQuantity, InventoryCommand, RemoveProduct, parse_delta, parse_quantity,
};
pub use config::{InventoryConfig, NegativeStockPolicy};
pub use notify::{CollectingSink, NotificationSink, NullSink, TracingSink};
pub use product::Product;
pub use service::InventoryService;
pub use sort::{insertion_sort_by_key, sorted_by_quantity};
pub use store::InventoryStore;
pub use tracker::{LOW_STOCK_THRESHOLD, LowStockTracker};
pub use view::{DisplayRow, InventoryView};
