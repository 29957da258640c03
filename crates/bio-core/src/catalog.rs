//! Trait seam for the remote protein catalog

use crate::error::ApiError;
use crate::model::{FunctionalAnnotation, Protein, ProteinInteraction};

/// Default result limit for both search operations.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// The remote query API the client orchestrates against.
///
/// Implemented by the HTTP client, the in-process demo catalog, and test
/// stubs. Every operation returns the server's response order untouched.
#[async_trait::async_trait]
pub trait ProteinCatalog: Send + Sync {
    /// Free-text protein search.
    async fn search_proteins(&self, query: &str, limit: usize) -> Result<Vec<Protein>, ApiError>;

    /// Proteins annotated with an exact GO term, keeping scores >= `min_score`.
    async fn proteins_by_go_term(
        &self,
        go_term_id: &str,
        min_score: f64,
        limit: usize,
    ) -> Result<Vec<Protein>, ApiError>;

    /// A single protein by identifier.
    async fn protein(&self, protein_id: &str) -> Result<Protein, ApiError>;

    /// Functional annotations for a protein.
    async fn functional_annotations(
        &self,
        protein_id: &str,
    ) -> Result<Vec<FunctionalAnnotation>, ApiError>;

    /// Pairwise interactions for a protein.
    async fn interactions(&self, protein_id: &str) -> Result<Vec<ProteinInteraction>, ApiError>;
}
