//! URL construction for the query API
//!
//! Kept as pure functions so request shapes are testable without a network.

use urlencoding::encode;

pub fn search_proteins(base: &str, query: &str, limit: usize) -> String {
    format!("{base}/proteins/search?query={}&limit={limit}", encode(query))
}

pub fn proteins_by_go_term(base: &str, go_term_id: &str, min_score: f64, limit: usize) -> String {
    format!(
        "{base}/go-terms/{}/proteins?min_score={min_score}&limit={limit}",
        encode(go_term_id)
    )
}

pub fn protein(base: &str, protein_id: &str) -> String {
    format!("{base}/proteins/{}", encode(protein_id))
}

pub fn functional_annotations(base: &str, protein_id: &str) -> String {
    format!("{base}/proteins/{}/functional-annotations", encode(protein_id))
}

pub fn interactions(base: &str, protein_id: &str) -> String {
    format!("{base}/proteins/{}/interactions", encode(protein_id))
}
