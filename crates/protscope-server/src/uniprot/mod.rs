//! UniProt integration
//!
//! - [`models`]: lenient schema of UniProtKB REST entries
//! - [`extract`]: normalization of an entry into a `ProteinReport`
//! - [`client`]: the [`ProteinSource`] trait and its HTTP implementation
//!
//! # Example
//! ```no_run
//! use protscope_server::config::UpstreamConfig;
//! use protscope_server::uniprot::{extract, ProteinSource, UniProtClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = UniProtClient::new(&UpstreamConfig::default())?;
//! if let Some(record) = client.fetch_record("P69905").await? {
//!     let report = extract(&record, "P69905")?;
//!     tracing::info!(name = %report.overview.recommended_name, "extracted");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod extract;
pub mod lenient;
pub mod models;

pub use client::{ProteinSource, UniProtClient, UpstreamError, SEARCH_RESULT_LIMIT};
pub use extract::{extract, ExtractError};
pub use models::UniProtRecord;
