//! Detail-view state machine

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::catalog::ProteinCatalog;
use crate::fetch::{DetailAggregate, FetchState};

/// The fixed set of detail-view sections. Selecting a tab never fetches;
/// all three slices are requested eagerly when the identifier changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Sequence,
    Annotations,
    Interactions,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Sequence,
        DetailTab::Annotations,
        DetailTab::Interactions,
    ];
}

struct DetailSlot {
    generation: u64,
    aggregate: DetailAggregate,
}

/// Drives the detail view for one protein identifier.
///
/// `load` issues three independent requests concurrently; each settles its
/// own slice in whatever order the responses arrive. Changing the
/// identifier invalidates everything still in flight for the previous one.
pub struct DetailOrchestrator {
    catalog: Arc<dyn ProteinCatalog>,
    runtime: tokio::runtime::Handle,
    slot: Arc<RwLock<DetailSlot>>,
    protein_id: String,
    pub active_tab: DetailTab,
}

impl DetailOrchestrator {
    pub fn new(catalog: Arc<dyn ProteinCatalog>, runtime: tokio::runtime::Handle) -> Self {
        Self {
            catalog,
            runtime,
            slot: Arc::new(RwLock::new(DetailSlot {
                generation: 0,
                aggregate: DetailAggregate::default(),
            })),
            protein_id: String::new(),
            active_tab: DetailTab::Overview,
        }
    }

    /// The identifier the current slices are keyed by.
    pub fn protein_id(&self) -> &str {
        &self.protein_id
    }

    /// Snapshot of the three slices for rendering.
    pub fn snapshot(&self) -> DetailAggregate {
        self.slot.read().aggregate.clone()
    }

    /// Key the view to `protein_id` and fetch everything it needs.
    ///
    /// Resets the tab to Overview, moves all three slices to Loading and
    /// issues the three requests concurrently. A blank identifier is a
    /// required-input error: the protein slice fails immediately and no
    /// request is made.
    pub fn load(&mut self, protein_id: impl Into<String>) {
        self.protein_id = protein_id.into();
        self.active_tab = DetailTab::Overview;

        if self.protein_id.trim().is_empty() {
            let mut slot = self.slot.write();
            slot.generation += 1;
            slot.aggregate = DetailAggregate {
                protein: FetchState::Failed("Protein ID is required.".to_string()),
                annotations: FetchState::Idle,
                interactions: FetchState::Idle,
            };
            return;
        }

        let generation = {
            let mut slot = self.slot.write();
            slot.generation += 1;
            slot.aggregate = DetailAggregate {
                protein: FetchState::Loading,
                annotations: FetchState::Loading,
                interactions: FetchState::Loading,
            };
            slot.generation
        };

        debug!(protein_id = %self.protein_id, generation, "loading protein detail");

        self.spawn_slice(generation, {
            let id = self.protein_id.clone();
            let catalog = self.catalog.clone();
            async move {
                catalog
                    .protein(&id)
                    .await
                    .map_err(|error| {
                        warn!(%error, %id, "protein fetch failed");
                        "Error loading protein data. Please try again.".to_string()
                    })
            }
        }, |aggregate, state| aggregate.protein = state);

        self.spawn_slice(generation, {
            let id = self.protein_id.clone();
            let catalog = self.catalog.clone();
            async move {
                catalog
                    .functional_annotations(&id)
                    .await
                    .map_err(|error| {
                        warn!(%error, %id, "annotation fetch failed");
                        "Error loading functional annotations. Please try again.".to_string()
                    })
            }
        }, |aggregate, state| aggregate.annotations = state);

        self.spawn_slice(generation, {
            let id = self.protein_id.clone();
            let catalog = self.catalog.clone();
            async move {
                catalog
                    .interactions(&id)
                    .await
                    .map_err(|error| {
                        warn!(%error, %id, "interaction fetch failed");
                        "Error loading interactions. Please try again.".to_string()
                    })
            }
        }, |aggregate, state| aggregate.interactions = state);
    }

    /// Spawn one slice request; the response is written back only if the
    /// generation is still current when it arrives.
    fn spawn_slice<T, F>(
        &self,
        generation: u64,
        request: F,
        write: impl FnOnce(&mut DetailAggregate, FetchState<T>) + Send + 'static,
    ) where
        T: Send + 'static,
        F: std::future::Future<Output = Result<T, String>> + Send + 'static,
    {
        let slot = self.slot.clone();
        self.runtime.spawn(async move {
            let state = match request.await {
                Ok(value) => FetchState::Ready(value),
                Err(message) => FetchState::Failed(message),
            };
            let mut slot = slot.write();
            if slot.generation != generation {
                debug!(generation, "dropping stale detail response");
                return;
            }
            write(&mut slot.aggregate, state);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::fetch::DetailPhase;
    use crate::model::{FunctionalAnnotation, Protein, ProteinInteraction};
    use std::time::Duration;
    use tokio::sync::Notify;

    fn protein(id: &str) -> Protein {
        Protein {
            id: id.into(),
            uuid: None,
            name: Some(format!("{id}-name")),
            external_id: None,
            protein_sequence: Some("MKT".into()),
            dataset: None,
            organism: None,
            organism_name: None,
            node_type: None,
            date: None,
            secondary_ids: Vec::new(),
            ambiguous_secondary_ids: Vec::new(),
        }
    }

    /// Stub catalog: requests for `held_id` block until released, and any
    /// operation named in `failing` returns a 500.
    #[derive(Default)]
    struct StubCatalog {
        held_id: Option<String>,
        release: Notify,
        interactions_fail: bool,
        protein_fails: bool,
    }

    impl StubCatalog {
        async fn gate(&self, protein_id: &str) {
            if self.held_id.as_deref() == Some(protein_id) {
                self.release.notified().await;
            }
        }
    }

    #[async_trait::async_trait]
    impl ProteinCatalog for StubCatalog {
        async fn search_proteins(
            &self,
            _query: &str,
            _limit: usize,
        ) -> Result<Vec<Protein>, ApiError> {
            Ok(Vec::new())
        }

        async fn proteins_by_go_term(
            &self,
            _go_term_id: &str,
            _min_score: f64,
            _limit: usize,
        ) -> Result<Vec<Protein>, ApiError> {
            Ok(Vec::new())
        }

        async fn protein(&self, protein_id: &str) -> Result<Protein, ApiError> {
            self.gate(protein_id).await;
            if self.protein_fails {
                return Err(ApiError::Status(404));
            }
            Ok(protein(protein_id))
        }

        async fn functional_annotations(
            &self,
            protein_id: &str,
        ) -> Result<Vec<FunctionalAnnotation>, ApiError> {
            self.gate(protein_id).await;
            Ok(vec![FunctionalAnnotation {
                protein_id: protein_id.into(),
                go_term_id: "GO:0016301".into(),
                go_term_name: Some("kinase activity".into()),
                go_code: Some("IEA".into()),
                ml_prediction_score: Some(0.9),
                string_combined_score: None,
                dataset: None,
                date: None,
            }])
        }

        async fn interactions(
            &self,
            protein_id: &str,
        ) -> Result<Vec<ProteinInteraction>, ApiError> {
            self.gate(protein_id).await;
            if self.interactions_fail {
                return Err(ApiError::Status(500));
            }
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
    async fn all_slices_settle_and_phase_becomes_ready() {
        let catalog = Arc::new(StubCatalog::default());
        let mut orchestrator =
            DetailOrchestrator::new(catalog, tokio::runtime::Handle::current());
        orchestrator.load("P123");

        wait_until(|| orchestrator.snapshot().phase() == DetailPhase::Ready).await;
        let snapshot = orchestrator.snapshot();
        assert_eq!(snapshot.protein.ready().unwrap().id, "P123");
        assert_eq!(snapshot.annotations.ready().unwrap().len(), 1);
        assert_eq!(orchestrator.active_tab, DetailTab::Overview);
    }

    #[tokio::test]
    async fn interactions_failure_stays_local_to_its_tab() {
        let catalog = Arc::new(StubCatalog {
            interactions_fail: true,
            ..StubCatalog::default()
        });
        let mut orchestrator =
            DetailOrchestrator::new(catalog, tokio::runtime::Handle::current());
        orchestrator.load("P123");

        wait_until(|| orchestrator.snapshot().phase() == DetailPhase::Ready).await;
        let snapshot = orchestrator.snapshot();
        assert!(snapshot.protein.is_ready());
        assert!(snapshot.annotations.is_ready());
        assert_eq!(
            snapshot.interactions.error(),
            Some("Error loading interactions. Please try again.")
        );
    }

    #[tokio::test]
    async fn protein_failure_blocks_the_view() {
        let catalog = Arc::new(StubCatalog {
            protein_fails: true,
            ..StubCatalog::default()
        });
        let mut orchestrator =
            DetailOrchestrator::new(catalog, tokio::runtime::Handle::current());
        orchestrator.load("P404");

        wait_until(|| matches!(orchestrator.snapshot().phase(), DetailPhase::Blocked(_))).await;
        assert_eq!(
            orchestrator.snapshot().phase(),
            DetailPhase::Blocked("Error loading protein data. Please try again.".into())
        );
    }

    #[tokio::test]
    async fn responses_for_a_stale_identifier_are_dropped() {
        let catalog = Arc::new(StubCatalog {
            held_id: Some("A".into()),
            ..StubCatalog::default()
        });
        let mut orchestrator =
            DetailOrchestrator::new(catalog.clone(), tokio::runtime::Handle::current());

        orchestrator.load("A");
        orchestrator.load("B");
        wait_until(|| orchestrator.snapshot().phase() == DetailPhase::Ready).await;
        assert_eq!(orchestrator.snapshot().protein.ready().unwrap().id, "B");

        // A's responses arrive late; state keyed to B must be untouched.
        catalog.release.notify_waiters();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(orchestrator.snapshot().protein.ready().unwrap().id, "B");
    }

    #[tokio::test]
    async fn blank_identifier_is_a_required_input_error() {
        let catalog = Arc::new(StubCatalog::default());
        let mut orchestrator =
            DetailOrchestrator::new(catalog, tokio::runtime::Handle::current());
        orchestrator.load("  ");

        let snapshot = orchestrator.snapshot();
        assert_eq!(
            snapshot.phase(),
            DetailPhase::Blocked("Protein ID is required.".into())
        );
        assert!(snapshot.annotations.is_idle());
    }
}
