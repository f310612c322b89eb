//! Normalization of a UniProt entry into a [`ProteinReport`]
//!
//! Most fields fall back to a default when the upstream entry lacks them.
//! A few paths are required: PDB cross-reference ids, subcellular location
//! values, feature positions, keyword names and PubMed citation references.
//! When one of those is missing the whole extraction fails with
//! [`ExtractError`]; no partial report is produced.
//!
//! The structure text is never fetched here. [`extract`] leaves
//! `structure.pdb_text` empty and the caller decides whether to download it.

use protscope_common::{
    Activity, CrossLink, Overview, ProteinReport, Structure, NOT_AVAILABLE,
};
use serde_json::Value;
use thiserror::Error;

use super::models::{Comment, Feature, Position, Reference, UniProtRecord};

/// How a missing value is rendered inside formatted strings
const MISSING: &str = "None";

/// External databases linked from the report, with their URL templates.
/// `{id}` is the cross-reference id, `{protein_id}` the identifier the user asked for.
pub const LINK_TEMPLATES: [(&str, &str); 6] = [
    ("Ensembl", "https://www.ensembl.org/Homo_sapiens/Gene/Summary?g={id}"),
    ("KEGG", "https://www.genome.jp/dbget-bin/www_bget?hsa:{id}"),
    ("Reactome", "https://reactome.org/PathwayBrowser/#/{id}"),
    ("GeneID", "https://www.ncbi.nlm.nih.gov/gene/{id}"),
    ("Pfam", "https://pfam.xfam.org/protein/{id}"),
    ("InterPro", "https://www.ebi.ac.uk/interpro/entry/UniProt/{protein_id}"),
];

const MODIFICATION_TYPES: [&str; 3] = ["Glycosylation", "Disulfide bond", "PTM"];
const DOMAIN_SITE_TYPES: [&str; 5] = ["Domain", "Active site", "Signal", "Propeptide", "Chain"];
const LOCALIZATION_TYPES: [&str; 2] = ["SUBCELLULAR LOCATION", "TISSUE SPECIFICITY"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("missing required field '{0}'")]
    MissingField(String),
}

fn missing(path: String) -> ExtractError {
    ExtractError::MissingField(path)
}

/// Build the report for `record`, which was looked up as `protein_id`
pub fn extract(record: &UniProtRecord, protein_id: &str) -> Result<ProteinReport, ExtractError> {
    let overview = overview(record);

    let sequence = record
        .sequence
        .as_ref()
        .and_then(|s| s.value.clone())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let structure = Structure {
        pdb_ids: pdb_ids(record)?,
        pdb_text: None,
    };

    Ok(ProteinReport {
        overview,
        sequence,
        structure,
        links: cross_links(record, protein_id),
        activity: activity(&record.comments),
        localization: localization(&record.comments)?,
        modifications: modifications(&record.features)?,
        domains_sites: domains_sites(&record.features)?,
        keywords: keywords(record)?,
        references: references(&record.references)?,
    })
}

fn overview(record: &UniProtRecord) -> Overview {
    let description = record.protein_description.as_ref();

    let alternative_names = description
        .map(|d| d.alternative_names.as_slice())
        .unwrap_or_default()
        .iter()
        .filter_map(|name| name.full_name.as_ref())
        .map(|full_name| value_or(&full_name.value, NOT_AVAILABLE))
        .collect();

    let mut gene_names = Vec::new();
    for gene in &record.genes {
        if let Some(name) = gene.gene_name.as_ref().filter(|v| is_set(v)) {
            let value = name.get("value").and_then(Value::as_str).unwrap_or(NOT_AVAILABLE);
            gene_names.push(value.to_string());
        }
        gene_names.extend(gene.synonyms.iter().map(|s| value_or(&s.value, NOT_AVAILABLE)));
    }


    Overview {
        accession: record.accession(),
        recommended_name: record
            .recommended_full_name()
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
        alternative_names,
        gene_names,
        organism: record
            .organism
            .as_ref()
            .and_then(|o| o.scientific_name.clone())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        protein_existence: record
            .protein_existence
            .as_ref()
            .and_then(|e| e.value.clone()),
        entry_version: record.entry_version,
        sequence_version: record.sequence.as_ref().and_then(|s| s.version),
        function: comment_texts(&record.comments, "FUNCTION", NOT_AVAILABLE),
    }
}

fn pdb_ids(record: &UniProtRecord) -> Result<Vec<String>, ExtractError> {
    record
        .cross_references
        .iter()
        .enumerate()
        .filter(|(_, xref)| xref.database.as_deref() == Some("PDB"))
        .map(|(i, xref)| {
            xref.id
                .clone()
                .ok_or_else(|| missing(format!("uniProtKBCrossReferences[{}].id", i)))
        })
        .collect()
}

fn cross_links(record: &UniProtRecord, protein_id: &str) -> Vec<CrossLink> {
    record
        .cross_references
        .iter()
        .filter_map(|xref| {
            let db = xref.database.as_deref()?;
            let (_, template) = LINK_TEMPLATES.iter().find(|(name, _)| *name == db)?;
            let url = template
                .replace("{id}", xref.id.as_deref().unwrap_or(MISSING))
                .replace("{protein_id}", protein_id);

            Some(CrossLink {
                db: db.to_string(),
                id: xref.id.clone(),
                url,
            })
        })
        .collect()
}

fn activity(comments: &[Comment]) -> Activity {
    let catalytic_activity = comments
        .iter()
        .filter(|c| c.is("CATALYTIC ACTIVITY"))
        .map(|c| c.reaction.as_ref().and_then(|r| r.name.clone()))
        .collect();

    Activity {
        catalytic_activity,
        regulation: comment_texts(comments, "ACTIVITY REGULATION", ""),
    }
}

fn localization(comments: &[Comment]) -> Result<Vec<String>, ExtractError> {
    let mut entries = Vec::new();

    for (i, comment) in comments.iter().enumerate() {
        if !LOCALIZATION_TYPES.iter().any(|t| comment.is(t)) {
            continue;
        }

        match comment.subcellular_locations {
            Some(ref locations) => {
                for (j, location) in locations.iter().enumerate() {
                    let value = location
                        .location
                        .as_ref()
                        .and_then(|l| l.value.clone())
                        .ok_or_else(|| {
                            missing(format!(
                                "comments[{}].subcellularLocations[{}].location.value",
                                i, j
                            ))
                        })?;
                    entries.push(value);
                }
            }
            None => entries.extend(comment.texts.iter().map(|t| value_or(&t.value, ""))),
        }
    }

    Ok(entries)
}

fn modifications(features: &[Feature]) -> Result<Vec<String>, ExtractError> {
    let mut entries = Vec::new();

    for (i, feature) in features.iter().enumerate() {
        let Some(feature_type) = feature.feature_type.as_deref() else {
            continue;
        };
        if MODIFICATION_TYPES.contains(&feature_type) {
            let start = position(feature, i, "start", |l| l.start.as_ref())?;
            entries.push(format!("{} at {}", feature_type, start));
        }
    }

    Ok(entries)
}

fn domains_sites(features: &[Feature]) -> Result<Vec<String>, ExtractError> {
    let mut entries = Vec::new();

    for (i, feature) in features.iter().enumerate() {
        let Some(feature_type) = feature.feature_type.as_deref() else {
            continue;
        };
        if DOMAIN_SITE_TYPES.contains(&feature_type) {
            let start = position(feature, i, "start", |l| l.start.as_ref())?;
            let end = position(feature, i, "end", |l| l.end.as_ref())?;
            entries.push(format!(
                "{}: {} ({}-{})",
                feature_type,
                feature.description.as_deref().unwrap_or(""),
                start,
                end
            ));
        }
    }

    Ok(entries)
}

/// Render `features[index].location.<bound>.value`, which must be present
fn position<F>(feature: &Feature, index: usize, bound: &str, pick: F) -> Result<String, ExtractError>
where
    F: FnOnce(&super::models::FeatureLocation) -> Option<&Position>,
{
    feature
        .location
        .as_ref()
        .and_then(pick)
        .and_then(|p| p.value.as_ref())
        .map(render)
        .ok_or_else(|| missing(format!("features[{}].location.{}.value", index, bound)))
}

fn keywords(record: &UniProtRecord) -> Result<Vec<String>, ExtractError> {
    record
        .keywords
        .iter()
        .enumerate()
        .map(|(i, kw)| {
            kw.name
                .as_ref()
                .map(render)
                .ok_or_else(|| missing(format!("keywords[{}].name", i)))
        })
        .collect()
}

fn references(references: &[Reference]) -> Result<Vec<String>, ExtractError> {
    let mut entries = Vec::with_capacity(references.len());

    for (i, reference) in references.iter().enumerate() {
        let citation = reference.citation.as_ref();
        let title = citation.and_then(|c| c.title.as_deref()).unwrap_or(MISSING);

        let mut pubmed = None;
        for (j, xref) in citation
            .map(|c| c.citation_cross_references.as_slice())
            .unwrap_or_default()
            .iter()
            .enumerate()
        {
            let path = |field: &str| {
                format!("references[{}].citation.citationCrossReferences[{}].{}", i, j, field)
            };
            let database = xref.database.as_deref().ok_or_else(|| missing(path("database")))?;
            if database == "PubMed" {
                pubmed = Some(xref.id.as_deref().ok_or_else(|| missing(path("id")))?);
                break;
            }
        }

        entries.push(format!("{} (PubMed:{})", title, pubmed.unwrap_or(MISSING)));
    }

    Ok(entries)
}

/// Values of every text block in comments of `comment_type`, in entry order
fn comment_texts(comments: &[Comment], comment_type: &str, default: &str) -> Vec<String> {
    comments
        .iter()
        .filter(|c| c.is(comment_type))
        .flat_map(|c| c.texts.iter().map(|t| value_or(&t.value, default)))
        .collect()
}

fn value_or(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

/// Truthiness of a loosely typed JSON value: null, false, zero and empty
/// strings, lists or objects are unset
fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => MISSING.to_string(),
        other => other.to_string(),
    }
}
