//! UniProt JSON fixtures

use serde_json::{json, Value};

pub const HBA_PDB: &str = "\
HEADER    OXYGEN TRANSPORT                        15-DEC-97   1A00
ATOM      1  N   VAL A   1      10.720  19.523   6.163  1.00 21.36           N
END
";

/// Trimmed-down UniProtKB entry for human hemoglobin subunit alpha
pub fn hemoglobin_alpha() -> Value {
    json!({
        "primaryAccession": "P69905",
        "proteinExistence": { "value": "1: Evidence at protein level" },
        "entryVersion": 200,
        "proteinDescription": {
            "recommendedName": { "fullName": { "value": "Hemoglobin subunit alpha" } },
            "alternativeNames": [
                { "fullName": { "value": "Alpha-globin" } },
                { "fullName": { "value": "Hemoglobin alpha chain" } }
            ]
        },
        "genes": [
            { "geneName": { "value": "HBA1" } },
            { "geneName": { "value": "HBA2" } }
        ],
        "organism": { "scientificName": "Homo sapiens", "taxonId": 9606 },
        "comments": [
            {
                "commentType": "FUNCTION",
                "texts": [{ "value": "Involved in oxygen transport from the lung to the various peripheral tissues." }]
            },
            {
                "commentType": "TISSUE SPECIFICITY",
                "texts": [{ "value": "Red blood cells." }]
            }
        ],
        "features": [
            {
                "type": "Chain",
                "description": "Hemoglobin subunit alpha",
                "location": { "start": { "value": 2 }, "end": { "value": 142 } }
            },
            {
                "type": "Glycosylation",
                "location": { "start": { "value": 8 }, "end": { "value": 8 } }
            }
        ],
        "keywords": [
            { "id": "KW-0349", "name": "Heme" },
            { "id": "KW-0561", "name": "Oxygen transport" }
        ],
        "references": [
            {
                "citation": {
                    "title": "The nucleotide sequence of the human alpha-globin gene.",
                    "citationCrossReferences": [
                        { "database": "DOI", "id": "10.1016/0092-8674(80)90347-5" },
                        { "database": "PubMed", "id": "6452630" }
                    ]
                }
            }
        ],
        "uniProtKBCrossReferences": [
            { "database": "PDB", "id": "1A00" },
            { "database": "PDB", "id": "1A01" },
            { "database": "Ensembl", "id": "ENST00000251595.11" },
            { "database": "GeneID", "id": "3039" },
            { "database": "InterPro", "id": "IPR000971" },
            { "database": "GO", "id": "GO:0005833" }
        ],
        "sequence": {
            "value": "MVLSPADKTNVKAAWGKVGAHAGEYGAEALERMFLSFPTTKTYFPHF",
            "length": 47,
            "version": 2
        }
    })
}

/// A search hit as returned with `fields=accession,protein_name`
pub fn search_hit(accession: &str, name: &str) -> Value {
    json!({
        "primaryAccession": accession,
        "proteinDescription": {
            "recommendedName": { "fullName": { "value": name } }
        }
    })
}
