//! Protein lookup: identifier in, normalized [`ProteinReport`](protscope_common::ProteinReport) out

pub mod queries;
pub mod routes;

pub use queries::{ProteinReportError, ProteinReportQuery};
pub use routes::lookup_routes;
