//! Data model for the signal-scoring core.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One daily price/volume observation.
///
/// Series are slices of bars ordered ascending by `date` with no duplicate
/// dates. Prices are positive with `low <= open, close <= high`; the data
/// source is responsible for these invariants. Bars are immutable values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Indicator values derived from one price series.
///
/// `None` means the series was too short for that indicator ("not
/// applicable"), which is distinct from a computed zero: inapplicable
/// signals contribute nothing to the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    pub rsi: Option<f64>,
    pub short_ma: Option<f64>,
    pub long_ma: Option<f64>,
    pub momentum: Option<f64>,
    pub volume_spike: Option<bool>,
}

impl IndicatorSnapshot {
    /// Moving-average crossover direction: `Some(true)` when the short MA is
    /// strictly above the long MA. Ties count as downtrend.
    pub fn uptrend(&self) -> Option<bool> {
        match (self.short_ma, self.long_ma) {
            (Some(short), Some(long)) => Some(short > long),
            _ => None,
        }
    }
}

/// Ternary trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
            Self::Hold => write!(f, "Hold"),
        }
    }
}

/// Terminal output of the scorer: the recommendation plus the raw RSI
/// (`None` when there was insufficient history) for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub recommendation: Recommendation,
    pub rsi: Option<f64>,
}

/// Trailing-window descriptive statistics for reporting.
///
/// Price and percentage fields are rounded to two decimal places at this
/// boundary; `average_volume` is the truncated mean. The rounding is
/// presentation-level and never feeds back into scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub current_price: f64,
    pub price_change: f64,
    pub percent_change: f64,
    pub window_high: f64,
    pub window_low: f64,
    pub average_volume: u64,
}
