//! Request lifecycle state and the detail-view aggregate

/// Lifecycle of one issued request.
///
/// A slice is `Idle` until a request is issued, `Loading` while in flight,
/// and settles exactly once into `Ready` or `Failed`. A new request starts
/// a fresh cycle; late responses from a superseded cycle are dropped by the
/// orchestrators and never reach a slice.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FetchState::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchState::Failed(_))
    }

    /// The settled value, if any.
    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The settled failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

use crate::model::{FunctionalAnnotation, Protein, ProteinInteraction};

/// Snapshot of the three independent detail-view slices.
///
/// Cloned out of the orchestrator on every frame; the slices settle in any
/// order and a consumer must not assume one implies another.
#[derive(Debug, Clone, Default)]
pub struct DetailAggregate {
    pub protein: FetchState<Protein>,
    pub annotations: FetchState<Vec<FunctionalAnnotation>>,
    pub interactions: FetchState<Vec<ProteinInteraction>>,
}

/// Strict join over the three slices.
#[derive(Debug, Clone, PartialEq)]
pub enum OverallState {
    Loading,
    Ready,
    Failed(String),
}

/// What the presentation layer is allowed to render.
///
/// Unlike [`OverallState`], only a failed protein slice blocks the view;
/// annotation/interaction failures stay local to their tab.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailPhase {
    Loading,
    Blocked(String),
    Ready,
}

impl DetailAggregate {
    /// Ready only when all three slices are ready; failed as soon as any
    /// slice failed (first failure in protein, annotations, interactions
    /// order wins); loading otherwise.
    pub fn overall_state(&self) -> OverallState {
        for error in [
            self.protein.error(),
            self.annotations.error(),
            self.interactions.error(),
        ]
        .into_iter()
        .flatten()
        {
            return OverallState::Failed(error.to_string());
        }

        if self.protein.is_ready() && self.annotations.is_ready() && self.interactions.is_ready() {
            OverallState::Ready
        } else {
            OverallState::Loading
        }
    }

    /// Presentation gate. The protein record is required for any tab to
    /// render meaningfully, so its failure blocks the whole view; a failure
    /// in annotations or interactions leaves the view usable and is
    /// reported inside the affected tab instead.
    pub fn phase(&self) -> DetailPhase {
        if let Some(error) = self.protein.error() {
            return DetailPhase::Blocked(error.to_string());
        }
        let annotations_settled = self.annotations.is_ready() || self.annotations.is_failed();
        let interactions_settled = self.interactions.is_ready() || self.interactions.is_failed();
        if self.protein.is_ready() && annotations_settled && interactions_settled {
            DetailPhase::Ready
        } else {
            DetailPhase::Loading
        }
    }
}
