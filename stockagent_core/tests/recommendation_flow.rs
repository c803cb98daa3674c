//! End-to-end core flow: indicators -> scorer -> summary over one series.

use chrono::{Days, NaiveDate};
use stockagent_core::{
    compute_indicators, score, summarize, IndicatorConfig, PriceBar, Recommendation,
};

fn series(closes: &[f64], volumes: &[u64]) -> Vec<PriceBar> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    closes
        .iter()
        .zip(volumes)
        .enumerate()
        .map(|(i, (&close, &volume))| PriceBar {
            date: start + Days::new(i as u64),
            open: close,
            high: close + 0.5,
            low: close - 0.5,
            close,
            volume,
        })
        .collect()
}

#[test]
fn steep_rise_with_volume_spike_is_a_buy() {
    // 25 strictly rising closes: gentle for 20 bars, then a steep final leg
    // so the 5-bar momentum clears 5%. Last-bar volume spikes to 400k.
    let mut closes: Vec<f64> = (0..20).map(|i| 100.0 + 0.2 * i as f64).collect();
    closes.extend([104.0, 105.5, 107.0, 108.5, 110.0]);
    let mut volumes = vec![150_000u64; 25];
    volumes[24] = 400_000;
    let bars = series(&closes, &volumes);

    let snapshot = compute_indicators(&bars, &IndicatorConfig::default());
    // Monotonic rise: no losses, RSI saturates at 100 (overbought, -1).
    assert_eq!(snapshot.rsi, Some(100.0));
    assert_eq!(snapshot.uptrend(), Some(true)); // +1
    assert!(snapshot.momentum.unwrap() > 0.05); // +1
    assert_eq!(snapshot.volume_spike, Some(true)); // +1

    // Technical score 2, sentiment 0: exactly at the inclusive Buy boundary.
    let result = score(&snapshot, 0.0);
    assert_eq!(result.recommendation, Recommendation::Buy);
    assert_eq!(result.rsi, Some(100.0));

    let stats = summarize(&bars).unwrap();
    assert_eq!(stats.current_price, 110.0);
    assert_eq!(stats.price_change, 10.0);
    assert_eq!(stats.percent_change, 10.0);
    assert_eq!(stats.window_high, 110.5);
    assert_eq!(stats.window_low, 99.5);
    assert_eq!(stats.average_volume, 160_000);
}

#[test]
fn flat_series_holds_with_neutral_rsi() {
    let bars = series(&[100.0; 25], &[150_000; 25]);

    let snapshot = compute_indicators(&bars, &IndicatorConfig::default());
    // Flat window: the 0/0 gain/loss case is reported as a neutral 50.
    assert_eq!(snapshot.rsi, Some(50.0));
    assert_eq!(snapshot.uptrend(), Some(false)); // -1, ties are downtrend
    assert_eq!(snapshot.momentum, Some(0.0));
    assert_eq!(snapshot.volume_spike, Some(false));

    let result = score(&snapshot, 0.0);
    assert_eq!(result.recommendation, Recommendation::Hold);
}

#[test]
fn short_series_degrades_every_signal_but_still_holds() {
    let bars = series(&[100.0, 101.0, 102.0], &[1000, 1000, 1000]);

    let snapshot = compute_indicators(&bars, &IndicatorConfig::default());
    assert_eq!(snapshot.rsi, None);
    assert_eq!(snapshot.uptrend(), None);
    assert_eq!(snapshot.momentum, None);
    assert_eq!(snapshot.volume_spike, None);

    // Even strongly positive sentiment alone cannot cross the threshold
    // unless it reaches +2 by itself.
    assert_eq!(score(&snapshot, 0.5).recommendation, Recommendation::Hold);
    assert_eq!(score(&snapshot, 2.0).recommendation, Recommendation::Buy);
}
