//! Test helpers for Protscope server integration tests
//!
//! - [`InMemorySource`]: a [`ProteinSource`] serving canned UniProt JSON and
//!   recording every upstream call
//! - request builders and body readers for `oneshot` tests
//! - UniProt fixtures (see [`fixtures`])
#![allow(dead_code)]

pub mod fixtures;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use protscope_server::{
    api::{create_router, AppState},
    config::CorsConfig,
    uniprot::{ProteinSource, UniProtRecord, UpstreamError},
};

pub use fixtures::*;

/// How the fake upstream answers a record lookup
#[derive(Debug, Clone)]
pub enum RecordReply {
    Found(Value),
    Unavailable(StatusCode),
    Undecodable,
}

#[derive(Default)]
pub struct InMemorySource {
    records: HashMap<String, RecordReply>,
    structures: HashMap<String, String>,
    search_results: Option<Vec<Value>>,
    pub record_calls: Mutex<Vec<String>>,
    pub structure_calls: Mutex<Vec<String>>,
    pub search_calls: Mutex<Vec<String>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, accession: &str, record: Value) -> Self {
        self.records
            .insert(accession.to_string(), RecordReply::Found(record));
        self
    }

    pub fn with_reply(mut self, accession: &str, reply: RecordReply) -> Self {
        self.records.insert(accession.to_string(), reply);
        self
    }

    pub fn with_structure(mut self, pdb_id: &str, text: &str) -> Self {
        self.structures.insert(pdb_id.to_string(), text.to_string());
        self
    }

    /// Search results to return; without this every search fails
    pub fn with_search_results(mut self, results: Vec<Value>) -> Self {
        self.search_results = Some(results);
        self
    }

    pub fn record_calls(&self) -> Vec<String> {
        self.record_calls.lock().unwrap().clone()
    }

    pub fn structure_calls(&self) -> Vec<String> {
        self.structure_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProteinSource for InMemorySource {
    async fn fetch_record(&self, accession: &str) -> Result<Option<UniProtRecord>, UpstreamError> {
        self.record_calls.lock().unwrap().push(accession.to_string());

        match self.records.get(accession) {
            None => Ok(None),
            Some(RecordReply::Found(value)) => Ok(Some(UniProtRecord::from_value(value.clone())?)),
            Some(RecordReply::Unavailable(status)) => Err(UpstreamError::Status(*status)),
            Some(RecordReply::Undecodable) => {
                let err = serde_json::from_str::<Value>("{\"primaryAccession\":").unwrap_err();
                Err(UpstreamError::Decode(err))
            },
        }
    }

    async fn fetch_structure(&self, pdb_id: &str) -> Option<String> {
        self.structure_calls.lock().unwrap().push(pdb_id.to_string());
        self.structures.get(pdb_id).cloned()
    }

    async fn search(&self, query: &str) -> Result<Vec<UniProtRecord>, UpstreamError> {
        self.search_calls.lock().unwrap().push(query.to_string());

        match self.search_results {
            Some(ref results) => results
                .iter()
                .cloned()
                .map(|v| UniProtRecord::from_value(v).map_err(UpstreamError::from))
                .collect(),
            None => Err(UpstreamError::Status(StatusCode::SERVICE_UNAVAILABLE)),
        }
    }
}

/// Build the full application router over `source`
pub fn test_app(source: Arc<InMemorySource>) -> Router {
    create_router(AppState::new(source), &CorsConfig::default())
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
