//! HTTP client for the UniProt REST API and the RCSB file server

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::models::{SearchResults, UniProtRecord};
use crate::config::UpstreamConfig;

/// Maximum number of hits requested from the search endpoint
pub const SEARCH_RESULT_LIMIT: usize = 5;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {0}")]
    Status(StatusCode),

    #[error("upstream returned an undecodable body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Outbound operations the lookup and autocomplete features depend on
#[async_trait]
pub trait ProteinSource: Send + Sync {
    /// Fetch a UniProtKB entry. `Ok(None)` when the upstream lookup does not succeed.
    async fn fetch_record(&self, accession: &str) -> Result<Option<UniProtRecord>, UpstreamError>;

    /// Download a PDB-format structure file. Any failure yields `None`.
    async fn fetch_structure(&self, pdb_id: &str) -> Option<String>;

    /// Free-text search returning at most [`SEARCH_RESULT_LIMIT`] entries
    async fn search(&self, query: &str) -> Result<Vec<UniProtRecord>, UpstreamError>;
}

/// [`ProteinSource`] backed by `rest.uniprot.org` and `files.rcsb.org`
#[derive(Debug, Clone)]
pub struct UniProtClient {
    client: Client,
    uniprot_base_url: String,
    structure_base_url: String,
}

impl UniProtClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            uniprot_base_url: config.uniprot_base_url.trim_end_matches('/').to_string(),
            structure_base_url: config.structure_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn record_url(&self, accession: &str) -> String {
        format!("{}/uniprotkb/{}.json", self.uniprot_base_url, accession)
    }

    fn structure_url(&self, pdb_id: &str) -> String {
        format!("{}/download/{}.pdb", self.structure_base_url, pdb_id)
    }

    fn search_url(&self) -> String {
        format!("{}/uniprotkb/search", self.uniprot_base_url)
    }
}

#[async_trait]
impl ProteinSource for UniProtClient {
    #[tracing::instrument(skip(self))]
    async fn fetch_record(&self, accession: &str) -> Result<Option<UniProtRecord>, UpstreamError> {
        let response = self.client.get(self.record_url(accession)).send().await?;

        if !response.status().is_success() {
            info!(status = %response.status(), "UniProt lookup did not succeed");
            return Ok(None);
        }

        let bytes = response.bytes().await?;
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;
        debug!(
            accession = %accession,
            top_level_keys = body.as_object().map(|o| o.len()).unwrap_or(0),
            "UniProt record received"
        );

        Ok(Some(UniProtRecord::from_value(body)?))
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_structure(&self, pdb_id: &str) -> Option<String> {
        let response = match self.client.get(self.structure_url(pdb_id)).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Structure download failed");
                return None;
            }
        };

        if !response.status().is_success() {
            info!(status = %response.status(), "Structure file not available");
            return None;
        }

        match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                warn!(error = %e, "Failed to read structure file body");
                None
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<UniProtRecord>, UpstreamError> {
        let size = SEARCH_RESULT_LIMIT.to_string();
        let response = self
            .client
            .get(self.search_url())
            .query(&[
                ("query", query),
                ("fields", "accession,protein_name"),
                ("format", "json"),
                ("size", size.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body = response.bytes().await?;
        let mut results: SearchResults = serde_json::from_slice(&body)?;
        results.results.truncate(SEARCH_RESULT_LIMIT);

        Ok(results.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(uniprot: &str, rcsb: &str) -> UniProtClient {
        UniProtClient::new(&UpstreamConfig {
            uniprot_base_url: uniprot.to_string(),
            structure_base_url: rcsb.to_string(),
            ..UpstreamConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_urls() {
        let client = client("https://rest.uniprot.org/", "https://files.rcsb.org");

        assert_eq!(
            client.record_url("P69905"),
            "https://rest.uniprot.org/uniprotkb/P69905.json"
        );
        assert_eq!(
            client.structure_url("1A00"),
            "https://files.rcsb.org/download/1A00.pdb"
        );
        assert_eq!(client.search_url(), "https://rest.uniprot.org/uniprotkb/search");
    }
}
