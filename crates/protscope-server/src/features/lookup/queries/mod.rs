pub mod protein_report;

pub use protein_report::{ProteinReportError, ProteinReportQuery};
