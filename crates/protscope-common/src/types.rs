//! Response documents produced by the Protscope server

use serde::{Deserialize, Serialize};

/// Fallback text for fields that are structurally absent upstream but always
/// present in the report.
pub const NOT_AVAILABLE: &str = "N/A";

/// Normalized protein report returned by the lookup endpoint.
///
/// Every field is always serialized. Missing upstream data shows up as an
/// empty list, [`NOT_AVAILABLE`] or `null`, never as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProteinReport {
    pub overview: Overview,
    /// Amino acid sequence, or [`NOT_AVAILABLE`]
    pub sequence: String,
    pub structure: Structure,
    pub links: Vec<CrossLink>,
    pub activity: Activity,
    pub localization: Vec<String>,
    pub modifications: Vec<String>,
    pub domains_sites: Vec<String>,
    pub keywords: Vec<String>,
    pub references: Vec<String>,
}

/// Summary panel of a protein report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    /// Primary accession (e.g., "P69905")
    pub accession: Option<String>,
    /// Recommended full name, or [`NOT_AVAILABLE`]
    pub recommended_name: String,
    pub alternative_names: Vec<String>,
    /// Gene names followed by their synonyms, gene by gene
    pub gene_names: Vec<String>,
    /// Organism scientific name, or [`NOT_AVAILABLE`]
    pub organism: String,
    /// Protein existence level (e.g., "1: Evidence at protein level")
    pub protein_existence: Option<String>,
    pub entry_version: Option<i64>,
    pub sequence_version: Option<i64>,
    /// Texts of all FUNCTION comments, in entry order
    pub function: Vec<String>,
}

/// 3D structure panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub pdb_ids: Vec<String>,
    /// Raw PDB file of the first structure, when it could be downloaded
    pub pdb_text: Option<String>,
}

/// Link to an external database record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossLink {
    pub db: String,
    pub id: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Reaction names of CATALYTIC ACTIVITY comments; unnamed reactions are `null`
    pub catalytic_activity: Vec<Option<String>>,
    pub regulation: Vec<String>,
}

/// One typeahead suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteEntry {
    pub id: Option<String>,
    pub name: String,
}
