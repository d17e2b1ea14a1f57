//! Core crate exports for the `fleetdesk` list browser.
//!
//! The binary loads an exported list, builds a table view from configured
//! columns, and either browses it interactively or prints a single page. The
//! modules here are the pieces it is assembled from; the table itself lives in
//! `fleetdesk-table` and the terminal host in `fleetdesk-tui`.

pub mod app_dirs;
pub mod dataset;
pub mod logging;
pub mod session;

pub use dataset::{ColumnConfig, DatasetError, FileFeed, JsonRecord, load_records};
pub use fleetdesk_table as table;
pub use fleetdesk_tui as tui;
pub use session::{Role, Session};
