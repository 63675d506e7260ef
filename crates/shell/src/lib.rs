//! `stockroom-shell`
//!
//! **Responsibility:** line-oriented terminal front end for the inventory.
//!
//! A thin caller: it parses text commands, invokes [`InventoryService`]
//! operations, and renders the sorted view. All rules live in
//! `stockroom-inventory`.
//!
//! [`InventoryService`]: stockroom_inventory::InventoryService

pub mod config;
pub mod input;
pub mod render;
pub mod session;

pub use config::{ConfigError, ShellConfig};
pub use input::{ParseError, ShellCommand};
pub use render::{ConsoleSink, TableView};
pub use session::{Flow, Session};
