use protscope_common::AutocompleteEntry;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::uniprot::{ProteinSource, UniProtRecord, SEARCH_RESULT_LIMIT};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutocompleteQuery {
    #[serde(default)]
    pub q: Option<String>,
}

impl AutocompleteQuery {
    pub fn term(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

impl From<UniProtRecord> for AutocompleteEntry {
    fn from(record: UniProtRecord) -> Self {
        Self {
            id: record.accession(),
            name: record.recommended_full_name().unwrap_or_default().to_string(),
        }
    }
}

/// Suggest up to five entries for a partial query.
///
/// Never fails: an upstream error of any kind yields an empty list.
#[tracing::instrument(skip(source))]
pub async fn handle(source: &dyn ProteinSource, query: AutocompleteQuery) -> Vec<AutocompleteEntry> {
    match source.search(query.term()).await {
        Ok(records) => records
            .into_iter()
            .take(SEARCH_RESULT_LIMIT)
            .map(AutocompleteEntry::from)
            .collect(),
        Err(e) => {
            warn!(error = %e, "Autocomplete search failed");
            Vec::new()
        },
    }
}
