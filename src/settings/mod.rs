//! Configuration loading and resolution utilities.
//!
//! `load` layers the default config files, `--config` files and
//! `FLEETDESK__*` environment variables, applies CLI overrides and returns a
//! validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::{LoggingSettings, ResolvedConfig, TableSettings, UiSettings};
