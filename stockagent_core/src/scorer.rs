//! Recommendation scorer.
//!
//! Folds the indicator snapshot and an externally supplied sentiment score
//! into one real-valued overall score, then maps it to Buy/Sell/Hold.
//! Accumulation is order-independent; inapplicable indicators contribute
//! nothing.

use crate::types::{IndicatorSnapshot, Recommendation, RecommendationResult};

/// RSI below this is oversold (+1); the threshold itself contributes 0.
pub const RSI_OVERSOLD: f64 = 30.0;
/// RSI above this is overbought (-1); the threshold itself contributes 0.
pub const RSI_OVERBOUGHT: f64 = 70.0;
/// Momentum magnitude beyond this fraction contributes +/-1.
pub const MOMENTUM_THRESHOLD: f64 = 0.05;
/// Overall score at or beyond +/- this value decides Buy/Sell.
pub const DECISION_THRESHOLD: f64 = 2.0;

/// Sum of all signal contributions plus the raw sentiment score.
///
/// Sentiment is added unweighted as a real number, so the overall score is
/// fractional whenever sentiment is.
pub fn overall_score(snapshot: &IndicatorSnapshot, sentiment: f64) -> f64 {
    let mut technical = 0i32;

    if let Some(rsi) = snapshot.rsi {
        if rsi < RSI_OVERSOLD {
            technical += 1;
        } else if rsi > RSI_OVERBOUGHT {
            technical -= 1;
        }
    }

    // When applicable the crossover always contributes +/-1; a flat or
    // equal crossover fires the downtrend branch.
    if let Some(uptrend) = snapshot.uptrend() {
        technical += if uptrend { 1 } else { -1 };
    }

    if let Some(momentum) = snapshot.momentum {
        if momentum > MOMENTUM_THRESHOLD {
            technical += 1;
        } else if momentum < -MOMENTUM_THRESHOLD {
            technical -= 1;
        }
    }

    // Volume spikes only ever add; quiet volume is not a bearish signal.
    if snapshot.volume_spike == Some(true) {
        technical += 1;
    }

    technical as f64 + sentiment
}

/// Maps the overall score to a recommendation, inclusive at the +/-2
/// boundaries, and carries the raw RSI through for display.
pub fn score(snapshot: &IndicatorSnapshot, sentiment: f64) -> RecommendationResult {
    let overall = overall_score(snapshot, sentiment);
    let recommendation = if overall >= DECISION_THRESHOLD {
        Recommendation::Buy
    } else if overall <= -DECISION_THRESHOLD {
        Recommendation::Sell
    } else {
        Recommendation::Hold
    };
    RecommendationResult {
        recommendation,
        rsi: snapshot.rsi,
    }
}
