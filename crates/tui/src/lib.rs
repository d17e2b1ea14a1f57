//! Interactive terminal front-end for `fleetdesk` tables.
//!
//! This crate hosts a [`fleetdesk_table::TableView`] in a full-screen
//! terminal UI: a search prompt, the bordered table, and a page switcher. It
//! also owns the themes and the [`DataFeed`] boundary used to refresh rows.

mod app;
pub mod components;
mod config;
mod feed;
pub mod input;
mod runtime;
pub mod style;

#[cfg(test)]
mod render_tests;

pub use app::{App, ViewOutcome};
pub use config::UiLabels;
pub use feed::DataFeed;
pub use runtime::run;

pub use crate::input::QueryInput;
pub use crate::style::{StyleConfig, Theme, builtin_themes, default_theme};
