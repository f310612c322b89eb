//! Protscope Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types and logging for the Protscope workspace.
//!
//! - **Types**: the normalized protein report and autocomplete entries that the
//!   server emits as JSON
//! - **Logging**: tracing subscriber setup driven by `LOG_*` environment variables
//!
//! # Example
//!
//! ```no_run
//! use protscope_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = LogConfig::from_env()?;
//!     init_logging(&config)?;
//!     tracing::info!("ready");
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod types;

pub use types::{
    Activity, AutocompleteEntry, CrossLink, Overview, ProteinReport, Structure, NOT_AVAILABLE,
};
