//! Score precedence and the "N/A" display sentinel

use std::fmt::Display;

/// Literal rendered wherever a display value is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Pick the display score from two optional sources: the ML prediction wins
/// when present, otherwise the STRING combined score. Zero is a valid score
/// and must not be treated as absent.
pub fn resolve_score(primary: Option<f64>, fallback: Option<f64>) -> Option<f64> {
    primary.or(fallback)
}

/// Render an optional value, substituting the sentinel when absent.
///
/// Applied uniformly at the column-resolution boundary instead of scattering
/// null-coalescing through the views.
pub fn display_or<T: Display>(value: Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_wins_when_present() {
        assert_eq!(resolve_score(Some(5.0), Some(3.0)), Some(5.0));
    }

    #[test]
    fn fallback_used_when_primary_absent() {
        assert_eq!(resolve_score(None, Some(3.0)), Some(3.0));
    }

    #[test]
    fn both_absent_is_none() {
        assert_eq!(resolve_score(None, None), None);
        assert_eq!(display_or(resolve_score(None, None)), NOT_AVAILABLE);
    }

    #[test]
    fn zero_is_a_valid_primary() {
        assert_eq!(resolve_score(Some(0.0), Some(9.0)), Some(0.0));
    }

    #[test]
    fn display_or_renders_present_values() {
        assert_eq!(display_or(Some(0.87)), "0.87");
        assert_eq!(display_or(Some("Q9Y6K9")), "Q9Y6K9");
        assert_eq!(display_or::<&str>(None), "N/A");
    }
}
