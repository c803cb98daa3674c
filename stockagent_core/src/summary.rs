//! Trailing-window summary statistics.

use crate::errors::AnalysisError;
use crate::types::{PriceBar, SummaryStats};

/// Rounds to two decimal places for the presentation boundary.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes descriptive statistics over the whole series.
///
/// The one validated precondition: `bars` must be non-empty, otherwise
/// `AnalysisError::EmptySeries` is returned and the caller should abort
/// analysis for that ticker. A zero first close yields a percent change
/// of 0 instead of propagating infinity.
pub fn summarize(bars: &[PriceBar]) -> Result<SummaryStats, AnalysisError> {
    let first = bars.first().ok_or(AnalysisError::EmptySeries)?;
    let last = bars.last().ok_or(AnalysisError::EmptySeries)?;

    let current_price = last.close;
    let price_change = current_price - first.close;
    let percent_change = if first.close == 0.0 {
        0.0
    } else {
        price_change / first.close * 100.0
    };
    let window_high = bars.iter().map(|b| b.high).fold(f64::MIN, f64::max);
    let window_low = bars.iter().map(|b| b.low).fold(f64::MAX, f64::min);
    let average_volume =
        bars.iter().map(|b| b.volume as f64).sum::<f64>() / bars.len() as f64;

    Ok(SummaryStats {
        current_price: round2(current_price),
        price_change: round2(price_change),
        percent_change: round2(percent_change),
        window_high: round2(window_high),
        window_low: round2(window_low),
        average_volume: average_volume as u64,
    })
}
