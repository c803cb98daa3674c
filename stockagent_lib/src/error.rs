//! Error types for the library layer.

use stockagent_core::AnalysisError;
use thiserror::Error;

use crate::market::ProviderError;

/// Errors that abort analysis of a single ticker. The agent isolates these
/// per ticker; one failure never aborts the rest of a batch.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("market data for {ticker}: {source}")]
    MarketData {
        ticker: String,
        #[source]
        source: ProviderError,
    },
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}
