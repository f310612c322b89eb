//! UniProtKB REST JSON models
//!
//! Only the parts of an entry the report uses are modelled. Every field is
//! optional and decoded leniently (see [`super::lenient`]), so a record always
//! decodes; whether a missing field is acceptable is decided by the extractor.

use serde::Deserialize;
use serde_json::Value;

use super::lenient;

/// A UniProtKB entry as returned by `GET /uniprotkb/{accession}.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniProtRecord {
    /// Kept verbatim; see [`UniProtRecord::accession`]
    #[serde(default, deserialize_with = "lenient::present")]
    pub primary_accession: Option<Value>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub protein_description: Option<ProteinDescription>,
    #[serde(default, deserialize_with = "lenient::objects")]
    pub genes: Vec<Gene>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub organism: Option<Organism>,
    /// Only the `{"value": ...}` form is read; a bare string decodes as `None`
    #[serde(default, deserialize_with = "lenient::object")]
    pub protein_existence: Option<EvidencedValue>,
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub entry_version: Option<i64>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub sequence: Option<Sequence>,
    #[serde(default, deserialize_with = "lenient::objects")]
    pub comments: Vec<Comment>,
    #[serde(default, rename = "uniProtKBCrossReferences", deserialize_with = "lenient::objects")]
    pub cross_references: Vec<CrossReference>,
    #[serde(default, deserialize_with = "lenient::objects")]
    pub features: Vec<Feature>,
    #[serde(default, deserialize_with = "lenient::objects")]
    pub keywords: Vec<Keyword>,
    #[serde(default, deserialize_with = "lenient::objects")]
    pub references: Vec<Reference>,
}

impl UniProtRecord {
    /// Decode a record from a JSON document. Fails only when the document is
    /// not a JSON object.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if !value.is_object() {
            return Err(serde::de::Error::custom("UniProt record is not a JSON object"));
        }
        serde_json::from_value(value)
    }

    /// Recommended full name, if every level of the name is present
    /// Primary accession as text. Null or absent is `None`; a non-string
    /// scalar is rendered as JSON (`12` becomes `"12"`).
    pub fn accession(&self) -> Option<String> {
        match self.primary_accession.as_ref()? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn recommended_full_name(&self) -> Option<&str> {
        self.protein_description
            .as_ref()?
            .recommended_name
            .as_ref()?
            .full_name
            .as_ref()?
            .value
            .as_deref()
    }
}

/// A string with optional evidence attached, e.g. `{"value": "HBA1", "evidences": [...]}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvidencedValue {
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinDescription {
    #[serde(default, deserialize_with = "lenient::object")]
    pub recommended_name: Option<ProteinName>,
    #[serde(default, deserialize_with = "lenient::objects")]
    pub alternative_names: Vec<ProteinName>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinName {
    #[serde(default, deserialize_with = "lenient::object")]
    pub full_name: Option<EvidencedValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gene {
    /// Raw `geneName`; any present value counts, not only objects
    #[serde(default, deserialize_with = "lenient::present")]
    pub gene_name: Option<Value>,
    #[serde(default, deserialize_with = "lenient::objects")]
    pub synonyms: Vec<EvidencedValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organism {
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub scientific_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sequence {
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub version: Option<i64>,
}

/// Typed annotation block (FUNCTION, CATALYTIC ACTIVITY, ...)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub comment_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::objects")]
    pub texts: Vec<EvidencedValue>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub reaction: Option<Reaction>,
    #[serde(default, deserialize_with = "lenient::optional_objects")]
    pub subcellular_locations: Option<Vec<SubcellularLocation>>,
}

impl Comment {
    pub fn is(&self, comment_type: &str) -> bool {
        self.comment_type.as_deref() == Some(comment_type)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Reaction {
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubcellularLocation {
    #[serde(default, deserialize_with = "lenient::object")]
    pub location: Option<EvidencedValue>,
}

/// Link from the entry to an external database
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrossReference {
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub database: Option<String>,
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub id: Option<String>,
}

/// Annotated region or site on the sequence
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Feature {
    #[serde(default, rename = "type", deserialize_with = "lenient::scalar")]
    pub feature_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub location: Option<FeatureLocation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureLocation {
    #[serde(default, deserialize_with = "lenient::object")]
    pub start: Option<Position>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub end: Option<Position>,
}

/// Sequence position. `value` is null for positions UniProt marks UNKNOWN.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Position {
    #[serde(default, deserialize_with = "lenient::present")]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Keyword {
    /// Any JSON value; only a missing key is rejected by the extractor
    #[serde(default, deserialize_with = "lenient::present")]
    pub name: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Reference {
    #[serde(default, deserialize_with = "lenient::object")]
    pub citation: Option<Citation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::objects")]
    pub citation_cross_references: Vec<CitationCrossReference>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CitationCrossReference {
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub database: Option<String>,
    #[serde(default, deserialize_with = "lenient::scalar")]
    pub id: Option<String>,
}

/// Body of `GET /uniprotkb/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResults {
    #[serde(default, deserialize_with = "lenient::objects")]
    pub results: Vec<UniProtRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_realistic_entry() {
        let record = UniProtRecord::from_value(json!({
            "primaryAccession": "P69905",
            "proteinDescription": {
                "recommendedName": {
                    "fullName": { "value": "Hemoglobin subunit alpha", "evidences": [] }
                }
            },
            "proteinExistence": { "value": "1: Evidence at protein level" },
            "entryVersion": 215,
            "entryAudit": { "entryVersion": 215, "sequenceVersion": 2 },
            "sequence": { "value": "MVLSPADKTNVKAAW", "length": 15 },
            "uniProtKBCrossReferences": [
                { "database": "PDB", "id": "1A00", "properties": [] }
            ],
            "features": [
                {
                    "type": "Chain",
                    "location": {
                        "start": { "value": 2, "modifier": "EXACT" },
                        "end": { "value": 142, "modifier": "EXACT" }
                    },
                    "description": "Hemoglobin subunit alpha"
                }
            ]
        }))
        .unwrap();

        assert_eq!(record.accession().as_deref(), Some("P69905"));
        assert_eq!(record.recommended_full_name(), Some("Hemoglobin subunit alpha"));
        assert_eq!(
            record.protein_existence.and_then(|e| e.value).as_deref(),
            Some("1: Evidence at protein level")
        );
        assert_eq!(record.entry_version, Some(215));
        assert_eq!(record.cross_references[0].id.as_deref(), Some("1A00"));

        let location = record.features[0].location.as_ref().unwrap();
        assert_eq!(location.start.as_ref().unwrap().value, Some(json!(2)));
    }

    #[test]
    fn test_shape_surprises_never_fail_decoding() {
        let record = UniProtRecord::from_value(json!({
            "primaryAccession": 12,
            "proteinDescription": "not an object",
            "genes": null,
            "comments": [null, "text", { "commentType": "FUNCTION" }],
            "features": { "type": "Domain" }
        }))
        .unwrap();

        assert_eq!(record.accession().as_deref(), Some("12"));
        assert!(record.protein_description.is_none());
        assert!(record.genes.is_empty());
        assert_eq!(record.comments.len(), 3);
        assert!(record.comments[2].is("FUNCTION"));
        assert!(record.features.is_empty());
    }

    #[test]
    fn test_bare_string_existence_is_not_read() {
        let record = UniProtRecord::from_value(json!({
            "primaryAccession": null,
            "proteinExistence": "1: Evidence at protein level"
        }))
        .unwrap();

        assert!(record.accession().is_none());
        assert!(record.protein_existence.is_none());
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        assert!(UniProtRecord::from_value(json!(["P69905"])).is_err());
        assert!(UniProtRecord::from_value(json!(null)).is_err());
    }

    #[test]
    fn test_search_results() {
        let results: SearchResults = serde_json::from_value(json!({
            "results": [
                { "primaryAccession": "P69905" },
                { "primaryAccession": "P68871" }
            ]
        }))
        .unwrap();
        assert_eq!(results.results.len(), 2);

        let empty: SearchResults = serde_json::from_value(json!({})).unwrap();
        assert!(empty.results.is_empty());
    }
}
