//! Page-level orchestration state machines
//!
//! Each orchestrator owns its fetch slices behind an `Arc<RwLock>` and
//! spawns completion tasks on the app's tokio runtime. A generation counter
//! guards every write-back: any event that supersedes the in-flight work
//! (new submit, mode switch, new identifier) bumps the counter, and a task
//! holding a stale generation drops its response instead of writing.

mod detail;
mod search;

pub use detail::{DetailOrchestrator, DetailTab};
pub use search::{SearchMode, SearchOrchestrator};
