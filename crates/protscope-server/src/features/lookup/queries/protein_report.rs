use protscope_common::ProteinReport;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::uniprot::{extract, ExtractError, ProteinSource, UpstreamError};

/// Form submitted by the landing page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProteinReportQuery {
    #[serde(default)]
    pub query: Option<String>,
}

impl ProteinReportQuery {
    pub fn validate(&self) -> Result<&str, ProteinReportError> {
        match self.query.as_deref() {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(ProteinReportError::MissingInput),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProteinReportError {
    #[error("No ID provided.")]
    MissingInput,
    #[error("Protein not found.")]
    NotFound,
    #[error("Upstream unavailable: {0}")]
    Upstream(UpstreamError),
    #[error("Server error: {0}")]
    Undecodable(serde_json::Error),
    #[error("Server error: {0}")]
    Extraction(#[from] ExtractError),
}

impl From<UpstreamError> for ProteinReportError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Decode(e) => Self::Undecodable(e),
            other => Self::Upstream(other),
        }
    }
}

/// Look up a protein and assemble its report.
///
/// Two dependent steps: fetch and normalize the UniProt entry, then download
/// the structure file of the first PDB cross-reference, if there is one.
#[tracing::instrument(skip(source))]
pub async fn handle(
    source: &dyn ProteinSource,
    query: ProteinReportQuery,
) -> Result<ProteinReport, ProteinReportError> {
    let protein_id = query.validate()?;

    let record = source
        .fetch_record(protein_id)
        .await?
        .ok_or(ProteinReportError::NotFound)?;

    let mut report = extract(&record, protein_id).map_err(|e| {
        error!(protein_id = %protein_id, error = %e, "Failed to normalize UniProt record");
        e
    })?;

    if let Some(pdb_id) = report.structure.pdb_ids.first().cloned() {
        report.structure.pdb_text = source.fetch_structure(&pdb_id).await;
    }

    debug!(
        links = report.links.len(),
        pdb_ids = report.structure.pdb_ids.len(),
        has_structure = report.structure.pdb_text.is_some(),
        "Protein report built"
    );

    Ok(report)
}
