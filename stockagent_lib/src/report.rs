//! Per-ticker report record and plain-text rendering.

use serde::Serialize;
use stockagent_core::Recommendation;

/// The per-ticker output record handed to downstream renderers.
///
/// `window_high`/`window_low` are present only when the run's display mode
/// includes the price range. `rsi` is `None` when there was insufficient
/// history for it.
#[derive(Debug, Clone, Serialize)]
pub struct TickerReport {
    pub ticker: String,
    pub recommendation: Recommendation,
    pub rsi: Option<f64>,
    pub current_price: f64,
    pub price_change: f64,
    pub percent_change: f64,
    pub window_high: Option<f64>,
    pub window_low: Option<f64>,
    pub average_volume: u64,
    pub sentiment: f64,
    pub headlines: Vec<String>,
}

impl TickerReport {
    /// Render the report block for one ticker.
    pub fn render(&self) -> String {
        let mut out = format!("{}:\n", self.ticker);
        match self.rsi {
            Some(rsi) => {
                out.push_str(&format!(
                    "Recommendation: {}, RSI: {:.2}\n",
                    self.recommendation, rsi
                ));
            }
            None => {
                out.push_str(&format!(
                    "Recommendation: {}, RSI: N/A\n",
                    self.recommendation
                ));
            }
        }
        out.push_str(&format!("Current Price: {:.2}\n", self.current_price));
        out.push_str(&format!(
            "Change: {:.2} ({:.2}%)\n",
            self.price_change, self.percent_change
        ));
        if let Some(high) = self.window_high {
            out.push_str(&format!("High: {:.2}\n", high));
        }
        if let Some(low) = self.window_low {
            out.push_str(&format!("Low: {:.2}\n", low));
        }
        out.push_str(&format!(
            "Average Volume: {}\n",
            group_thousands(self.average_volume)
        ));
        if self.headlines.is_empty() {
            out.push_str("News: no relevant news found.\n");
        } else {
            out.push_str("News:\n");
            for (i, headline) in self.headlines.iter().enumerate() {
                out.push_str(&format!("   {}. {}\n", i + 1, headline));
            }
        }
        out
    }
}

/// Insert comma separators into an integer, e.g. 1250000 -> "1,250,000".
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
