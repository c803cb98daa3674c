//! Technical indicator engine.
//!
//! Computes RSI, moving-average crossover, momentum, and a volume-spike
//! signal from a date-ascending slice of price bars. Each sub-signal that
//! cannot be computed from the available history is reported as `None`
//! rather than defaulted to zero, so downstream scoring can tell
//! "not applicable" apart from a computed zero.

use crate::types::{IndicatorSnapshot, PriceBar};

/// Window sizes and thresholds for the indicator engine.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorConfig {
    /// Number of close-to-close deltas in the RSI window.
    pub rsi_period: usize,
    pub short_ma_window: usize,
    pub long_ma_window: usize,
    /// Python-style lookback: the reference close is `lookback` positions
    /// from the end of the series (4 deltas back for a lookback of 5).
    pub momentum_lookback: usize,
    pub volume_window: usize,
    /// Current volume must exceed this multiple of the trailing average to
    /// count as a spike.
    pub volume_spike_multiplier: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            short_ma_window: 10,
            long_ma_window: 20,
            momentum_lookback: 5,
            volume_window: 20,
            volume_spike_multiplier: 1.5,
        }
    }
}

/// Computes all indicator signals over the trailing windows of `bars`.
///
/// Never fails: an empty or short series yields a snapshot with the
/// inapplicable signals set to `None`.
pub fn compute_indicators(bars: &[PriceBar], config: &IndicatorConfig) -> IndicatorSnapshot {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

    // Both MAs require the long window; a short MA alone is not a crossover.
    let (short_ma, long_ma) = match (
        trailing_mean(&closes, config.short_ma_window),
        trailing_mean(&closes, config.long_ma_window),
    ) {
        (Some(short), Some(long)) => (Some(short), Some(long)),
        _ => (None, None),
    };

    IndicatorSnapshot {
        rsi: rsi(&closes, config.rsi_period),
        short_ma,
        long_ma,
        momentum: momentum(&closes, config.momentum_lookback),
        volume_spike: volume_spike(bars, config.volume_window, config.volume_spike_multiplier),
    }
}

/// Relative Strength Index over the most recent `period` deltas, using a
/// simple moving average of gains and losses (not Wilder's smoothing).
///
/// Returns `None` with fewer than `period + 1` closes. A window with no
/// losses saturates to exactly 100.0; a completely flat window (the 0/0
/// case) is reported as a neutral 50.0 rather than NaN.
pub fn rsi(closes: &[f64], period: usize) -> Option<f64> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }
    let window = &closes[closes.len() - (period + 1)..];
    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    for pair in window.windows(2) {
        let delta = pair[1] - pair[0];
        if delta > 0.0 {
            gain_sum += delta;
        } else {
            loss_sum -= delta;
        }
    }
    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;
    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return Some(50.0);
        }
        return Some(100.0);
    }
    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

/// Arithmetic mean of the last `window` values, or `None` if there are
/// fewer than `window` of them.
fn trailing_mean(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }
    let tail = &values[values.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

/// Rate of change from the close `lookback` positions back to the last
/// close, as a fraction. `None` with fewer than `lookback` closes.
fn momentum(closes: &[f64], lookback: usize) -> Option<f64> {
    if lookback == 0 || closes.len() < lookback {
        return None;
    }
    let reference = closes[closes.len() - lookback];
    let last = closes[closes.len() - 1];
    Some((last - reference) / reference)
}

/// Whether the current volume exceeds `multiplier` times the trailing
/// average over `window` bars. The average includes the current bar.
fn volume_spike(bars: &[PriceBar], window: usize, multiplier: f64) -> Option<bool> {
    if window == 0 || bars.len() < window {
        return None;
    }
    let tail = &bars[bars.len() - window..];
    let average = tail.iter().map(|b| b.volume as f64).sum::<f64>() / window as f64;
    let current = bars[bars.len() - 1].volume as f64;
    Some(current > multiplier * average)
}
