//! Signal-scoring core for the stock agent: indicators, recommendation
//! scoring, and trailing-window summary statistics.
//!
//! All operations are pure functions over caller-owned slices of price bars.
//! The crate performs no I/O, holds no cross-call state, and is safe to
//! invoke concurrently from any number of threads or tasks.

pub mod errors;
pub mod indicators;
pub mod scorer;
pub mod summary;
pub mod types;

pub use errors::AnalysisError;
pub use indicators::{compute_indicators, IndicatorConfig};
pub use scorer::{overall_score, score};
pub use summary::summarize;
pub use types::{
    IndicatorSnapshot, PriceBar, Recommendation, RecommendationResult, SummaryStats,
};
