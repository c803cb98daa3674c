//! Market data boundary: the provider trait and its error type.

use stockagent_core::PriceBar;
use thiserror::Error;

/// Errors from boundary providers (market data or news).
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("unknown ticker {0}")]
    UnknownTicker(String),
    #[error("no trading data returned for {0}")]
    NoData(String),
    #[error("invalid timestamp in provider response: {0}")]
    InvalidDate(String),
    #[error("upstream provider error: {0}")]
    Upstream(String),
}

/// Source of historical price bars for a ticker.
///
/// Implementations must return a non-empty, date-ascending series or a
/// typed error; silently returning an empty series is not allowed.
#[allow(async_fn_in_trait)]
pub trait MarketDataProvider {
    /// Fetch daily bars covering the trailing `days` calendar days.
    async fn fetch_history(&self, ticker: &str, days: i64) -> Result<Vec<PriceBar>, ProviderError>;
}
