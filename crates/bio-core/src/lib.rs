//! Core functionality for the Biographica protein browser
//!
//! This crate provides the data model, the fetch/pagination/score
//! primitives, and the page-level orchestration state machines. It knows
//! nothing about rendering; the views crate consumes snapshots of the
//! state owned here.

pub mod catalog;
pub mod error;
pub mod fetch;
pub mod model;
pub mod orchestrator;
pub mod paging;
pub mod score;

// Re-export commonly used types
pub use catalog::ProteinCatalog;
pub use error::ApiError;
pub use fetch::{DetailAggregate, DetailPhase, FetchState, OverallState};
pub use model::{FunctionalAnnotation, Protein, ProteinInteraction};
pub use orchestrator::{DetailOrchestrator, DetailTab, SearchMode, SearchOrchestrator};
pub use paging::{paginate, PageWindow, DEFAULT_PAGE_SIZE};
pub use score::{display_or, resolve_score, NOT_AVAILABLE};
