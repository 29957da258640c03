//! Wire records returned by the Biographica query API
//!
//! Field sets follow the backend's response models. Everything the server
//! may omit is an `Option`; list fields default to empty so older records
//! without them still deserialize.

use serde::{Deserialize, Serialize};

/// The primary searchable record: a protein and its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Protein {
    pub id: String,
    #[serde(default)]
    pub uuid: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub protein_sequence: Option<String>,
    #[serde(default)]
    pub dataset: Option<String>,
    #[serde(default)]
    pub organism: Option<String>,
    #[serde(default)]
    pub organism_name: Option<String>,
    #[serde(default)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub secondary_ids: Vec<String>,
    #[serde(default)]
    pub ambiguous_secondary_ids: Vec<String>,
}

impl Protein {
    /// Display name, falling back to the record id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Organism line shown under the protein title: scientific name with the
    /// taxon code in parentheses when both are present.
    pub fn organism_label(&self) -> String {
        match (self.organism_name.as_deref(), self.organism.as_deref()) {
            (Some(name), Some(code)) => format!("{} ({})", name, code),
            (Some(name), None) => name.to_string(),
            (None, Some(code)) => code.to_string(),
            (None, None) => "Unknown organism".to_string(),
        }
    }
}

/// A functional-classification record linking a protein to a GO term with a
/// confidence score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionalAnnotation {
    pub protein_id: String,
    pub go_term_id: String,
    #[serde(default)]
    pub go_term_name: Option<String>,
    #[serde(default)]
    pub go_code: Option<String>,
    #[serde(default, rename = "ML_prediction_score")]
    pub ml_prediction_score: Option<f64>,
    #[serde(default)]
    pub string_combined_score: Option<f64>,
    #[serde(default)]
    pub dataset: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// A pairwise interaction record between two proteins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinInteraction {
    pub source_protein_id: String,
    pub target_protein_id: String,
    #[serde(default)]
    pub target_protein_name: Option<String>,
    #[serde(default, rename = "ML_prediction_score")]
    pub ml_prediction_score: Option<f64>,
    #[serde(default)]
    pub string_combined_score: Option<f64>,
    #[serde(default)]
    pub dataset: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}
