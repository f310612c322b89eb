//! Protscope Server Library
//!
//! Web front end that aggregates public protein data. Given a UniProt
//! accession it fetches the UniProtKB entry, normalizes it into a
//! [`ProteinReport`](protscope_common::ProteinReport) and attaches the PDB
//! structure file of the first cross-referenced structure.
//!
//! # Endpoints
//!
//! - `GET /`: landing page with the search form
//! - `POST /search`: form field `query`, returns the protein report as JSON
//! - `GET /autocomplete?q=`: up to five `{id, name}` suggestions
//! - `GET /health`: liveness probe
//!
//! # Architecture
//!
//! - [`uniprot`]: upstream HTTP client behind the [`uniprot::ProteinSource`]
//!   trait, the lenient record schema and the extractor
//! - [`features`]: one vertical slice per endpoint (`queries/` + `routes.rs`)
//! - [`api`]: router assembly, middleware stack and graceful shutdown
//!
//! # Example
//!
//! ```no_run
//! use protscope_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod uniprot;

pub use error::AppError;
