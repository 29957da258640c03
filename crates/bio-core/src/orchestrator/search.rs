//! Search state machine

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::catalog::{ProteinCatalog, DEFAULT_SEARCH_LIMIT};
use crate::fetch::FetchState;
use crate::model::Protein;

/// Which of the two disjoint search semantics is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Free-text search over proteins.
    Protein,
    /// Exact GO term lookup with a minimum association score.
    GoTerm,
}

impl SearchMode {
    fn failure_message(self) -> &'static str {
        match self {
            SearchMode::Protein => "Error searching for proteins. Please try again.",
            SearchMode::GoTerm => "Error searching for GO term. Please try again.",
        }
    }
}

/// Slice of state shared with in-flight request tasks.
struct SearchSlot {
    generation: u64,
    fetch: FetchState<Vec<Protein>>,
}

/// Drives a single-entity-type search against the catalog.
///
/// `query`, `mode` and `min_score` are the user-editable inputs; the fetch
/// slice is only ever written by `submit`/`switch_mode` and by the task
/// belonging to the most recently issued request.
pub struct SearchOrchestrator {
    catalog: Arc<dyn ProteinCatalog>,
    runtime: tokio::runtime::Handle,
    slot: Arc<RwLock<SearchSlot>>,
    mode: SearchMode,
    pub query: String,
    pub min_score: f64,
}

impl SearchOrchestrator {
    pub fn new(catalog: Arc<dyn ProteinCatalog>, runtime: tokio::runtime::Handle) -> Self {
        Self {
            catalog,
            runtime,
            slot: Arc::new(RwLock::new(SearchSlot {
                generation: 0,
                fetch: FetchState::Idle,
            })),
            mode: SearchMode::Protein,
            query: String::new(),
            min_score: 0.5,
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Snapshot of the fetch slice for rendering.
    pub fn fetch_state(&self) -> FetchState<Vec<Protein>> {
        self.slot.read().fetch.clone()
    }

    /// Issue the request for the current query and mode.
    ///
    /// A blank query is a guarded no-op. A submit while a previous request
    /// is still in flight supersedes it: the older response is dropped when
    /// it eventually arrives.
    pub fn submit(&self) {
        let query = self.query.trim().to_string();
        if query.is_empty() {
            return;
        }

        let generation = {
            let mut slot = self.slot.write();
            slot.generation += 1;
            slot.fetch = FetchState::Loading;
            slot.generation
        };

        let mode = self.mode;
        let min_score = self.min_score;
        let catalog = self.catalog.clone();
        let slot = self.slot.clone();
        debug!(%query, ?mode, generation, "issuing search request");

        self.runtime.spawn(async move {
            let result = match mode {
                SearchMode::Protein => catalog.search_proteins(&query, DEFAULT_SEARCH_LIMIT).await,
                SearchMode::GoTerm => {
                    catalog
                        .proteins_by_go_term(&query, min_score, DEFAULT_SEARCH_LIMIT)
                        .await
                }
            };

            let mut slot = slot.write();
            if slot.generation != generation {
                debug!(generation, "dropping stale search response");
                return;
            }
            slot.fetch = match result {
                Ok(proteins) => {
                    debug!(count = proteins.len(), "search settled");
                    FetchState::Ready(proteins)
                }
                Err(error) => {
                    warn!(%error, "search failed");
                    FetchState::Failed(mode.failure_message().to_string())
                }
            };
        });
    }

    /// Switch search semantics, discarding any previous result.
    ///
    /// The two modes query disjoint things, so stale results are cleared
    /// rather than filtered; an in-flight request of the old mode is
    /// invalidated by the generation bump.
    pub fn switch_mode(&mut self, mode: SearchMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        let mut slot = self.slot.write();
        slot.generation += 1;
        slot.fetch = FetchState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::model::{FunctionalAnnotation, ProteinInteraction};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::sync::Notify;

    fn protein(id: &str) -> Protein {
        Protein {
            id: id.into(),
            uuid: None,
            name: Some(format!("{id}-name")),
            external_id: None,
            protein_sequence: None,
            dataset: None,
            organism: None,
            organism_name: None,
            node_type: None,
            date: None,
            secondary_ids: Vec::new(),
            ambiguous_secondary_ids: Vec::new(),
        }
    }

    /// Catalog stub whose first search call blocks until released.
    struct GatedCatalog {
        calls: AtomicUsize,
        release_first: Notify,
        fail: bool,
    }

    impl GatedCatalog {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                release_first: Notify::new(),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new()
            }
        }
    }

    #[async_trait::async_trait]
    impl ProteinCatalog for GatedCatalog {
        async fn search_proteins(
            &self,
            query: &str,
            _limit: usize,
        ) -> Result<Vec<Protein>, ApiError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call == 0 {
                self.release_first.notified().await;
            }
            if self.fail {
                return Err(ApiError::Status(500));
            }
            Ok(vec![protein(&format!("{query}-{call}"))])
        }

        async fn proteins_by_go_term(
            &self,
            go_term_id: &str,
            min_score: f64,
            _limit: usize,
        ) -> Result<Vec<Protein>, ApiError> {
            if self.fail {
                return Err(ApiError::Status(500));
            }
            Ok(vec![protein(&format!("{go_term_id}@{min_score}"))])
        }

        async fn protein(&self, protein_id: &str) -> Result<Protein, ApiError> {
            Ok(protein(protein_id))
        }

        async fn functional_annotations(
            &self,
            _protein_id: &str,
        ) -> Result<Vec<FunctionalAnnotation>, ApiError> {
            Ok(Vec::new())
        }

        async fn interactions(
            &self,
            _protein_id: &str,
        ) -> Result<Vec<ProteinInteraction>, ApiError> {
            Ok(Vec::new())
        }
    }

    async fn wait_until(mut condition: impl FnMut() -> bool) {
        for _ in 0..200 {
            if condition() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("condition not met within one second");
    }

    #[tokio::test]
    async fn whitespace_query_is_a_no_op() {
        let catalog = Arc::new(GatedCatalog::new());
        let mut orchestrator =
            SearchOrchestrator::new(catalog.clone(), tokio::runtime::Handle::current());
        orchestrator.query = "  ".into();
        orchestrator.submit();

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(orchestrator.fetch_state().is_idle());
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn second_submit_supersedes_the_first() {
        let catalog = Arc::new(GatedCatalog::new());
        let mut orchestrator =
            SearchOrchestrator::new(catalog.clone(), tokio::runtime::Handle::current());

        orchestrator.query = "kinase".into();
        orchestrator.submit();
        wait_until(|| catalog.calls.load(Ordering::SeqCst) == 1).await;

        orchestrator.submit();
        wait_until(|| orchestrator.fetch_state().is_ready()).await;
        let settled = orchestrator.fetch_state();
        assert_eq!(settled.ready().unwrap()[0].id, "kinase-1");

        // The first response arrives late and must be dropped.
        catalog.release_first.notify_one();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(orchestrator.fetch_state(), settled);
    }

    #[tokio::test]
    async fn switching_mode_clears_results_even_mid_flight() {
        let catalog = Arc::new(GatedCatalog::new());
        let mut orchestrator =
            SearchOrchestrator::new(catalog.clone(), tokio::runtime::Handle::current());

        orchestrator.query = "kinase".into();
        orchestrator.submit();
        wait_until(|| catalog.calls.load(Ordering::SeqCst) == 1).await;

        orchestrator.switch_mode(SearchMode::GoTerm);
        assert!(orchestrator.fetch_state().is_idle());

        // Late arrival of the superseded request must not repopulate state.
        catalog.release_first.notify_one();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(orchestrator.fetch_state().is_idle());
    }

    #[tokio::test]
    async fn failure_message_is_mode_specific() {
        let catalog = Arc::new(GatedCatalog::failing());
        let mut orchestrator =
            SearchOrchestrator::new(catalog.clone(), tokio::runtime::Handle::current());

        orchestrator.query = "kinase".into();
        orchestrator.switch_mode(SearchMode::GoTerm);
        orchestrator.submit();
        wait_until(|| orchestrator.fetch_state().is_failed()).await;
        assert_eq!(
            orchestrator.fetch_state().error(),
            Some("Error searching for GO term. Please try again.")
        );
    }

    #[tokio::test]
    async fn go_term_mode_forwards_the_threshold() {
        let catalog = Arc::new(GatedCatalog::new());
        let mut orchestrator =
            SearchOrchestrator::new(catalog.clone(), tokio::runtime::Handle::current());

        orchestrator.switch_mode(SearchMode::GoTerm);
        orchestrator.query = "GO:0016301".into();
        orchestrator.min_score = 0.8;
        orchestrator.submit();
        wait_until(|| orchestrator.fetch_state().is_ready()).await;
        assert_eq!(
            orchestrator.fetch_state().ready().unwrap()[0].id,
            "GO:0016301@0.8"
        );
    }
}
