//! Error taxonomy for the catalog boundary

use thiserror::Error;

/// Failures crossing the catalog boundary.
///
/// `Status` and `Transport` are transport-level failures; `InvalidInput`
/// covers caller-side validation (blank query, missing identifier). All of
/// them are recoverable by a new user action, so the type is `Clone` and
/// can live inside state snapshots.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("API error: {0}")]
    Status(u16),

    /// The request never produced a usable response (connect, timeout,
    /// malformed body).
    #[error("network error: {0}")]
    Transport(String),

    /// A required input was missing or unusable before any request was made.
    #[error("{0}")]
    InvalidInput(String),
}
