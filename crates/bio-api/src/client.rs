//! reqwest-backed catalog implementation

use bio_core::{ApiError, FunctionalAnnotation, Protein, ProteinCatalog, ProteinInteraction};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::endpoints;

/// Catalog client talking to the remote query API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Client against the configured base URL (see [`crate::api_base_url`]).
    pub fn new() -> Self {
        Self::with_base_url(crate::api_base_url())
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a JSON document, mapping a non-2xx status to `ApiError::Status`
    /// and connect/decode failures to `ApiError::Transport`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!(%url, "GET");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|error| ApiError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|error| ApiError::Transport(error.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ProteinCatalog for ApiClient {
    async fn search_proteins(&self, query: &str, limit: usize) -> Result<Vec<Protein>, ApiError> {
        self.get_json(&endpoints::search_proteins(&self.base_url, query, limit))
            .await
    }

    async fn proteins_by_go_term(
        &self,
        go_term_id: &str,
        min_score: f64,
        limit: usize,
    ) -> Result<Vec<Protein>, ApiError> {
        self.get_json(&endpoints::proteins_by_go_term(
            &self.base_url,
            go_term_id,
            min_score,
            limit,
        ))
        .await
    }

    async fn protein(&self, protein_id: &str) -> Result<Protein, ApiError> {
        self.get_json(&endpoints::protein(&self.base_url, protein_id))
            .await
    }

    async fn functional_annotations(
        &self,
        protein_id: &str,
    ) -> Result<Vec<FunctionalAnnotation>, ApiError> {
        self.get_json(&endpoints::functional_annotations(
            &self.base_url,
            protein_id,
        ))
        .await
    }

    async fn interactions(&self, protein_id: &str) -> Result<Vec<ProteinInteraction>, ApiError> {
        self.get_json(&endpoints::interactions(&self.base_url, protein_id))
            .await
    }
}
