//! Core application state and behavior for the interactive table host.
//!
//! The [`App`] type owns the dataset, the table view and UI state. Supporting
//! modules partition the implementation into focused pieces: actions (input
//! handling), rendering, result selection, and fetch coordination.

mod actions;
mod fetch;
mod render;
mod results;
mod state;

pub use state::{App, ViewOutcome};
