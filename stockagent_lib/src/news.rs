//! News sentiment boundary.
//!
//! Sentiment stays a coarse, externally derived number: the scorer only
//! needs a bounded real. The default heuristic scores the mere presence of
//! recent headlines; anything smarter plugs in behind the same trait.

use crate::market::ProviderError;

/// Score contributed when any recent headline exists.
pub const HEADLINE_SENTIMENT: f64 = 0.5;

/// Coarse sentiment from headline presence: 0.5 if any, else 0.0.
/// Absence of news is identical to a zero score.
pub fn headline_sentiment(headlines: &[String]) -> f64 {
    if headlines.is_empty() {
        0.0
    } else {
        HEADLINE_SENTIMENT
    }
}

/// Source of recent news headlines (or summaries) for a ticker.
#[allow(async_fn_in_trait)]
pub trait SentimentProvider {
    async fn headlines(&self, ticker: &str) -> Result<Vec<String>, ProviderError>;
}

/// Provider for runs without a configured news source; every ticker scores
/// a sentiment of 0.0.
pub struct NoNews;

impl SentimentProvider for NoNews {
    async fn headlines(&self, _ticker: &str) -> Result<Vec<String>, ProviderError> {
        Ok(Vec::new())
    }
}
