//! Error types for the signal-scoring core.

use thiserror::Error;

/// Errors from core analysis operations.
///
/// Per-indicator insufficiency is not an error: indicators degrade to
/// "not applicable" and contribute zero to the score. The only hard
/// precondition is a non-empty series, and violating it aborts analysis
/// for that ticker only.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("price series is empty")]
    EmptySeries,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_display() {
        assert_eq!(
            AnalysisError::EmptySeries.to_string(),
            "price series is empty"
        );
    }
}
