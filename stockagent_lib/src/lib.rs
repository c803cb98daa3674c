//! Library layer for the stock agent: boundary providers, report assembly,
//! and per-run orchestration around the `stockagent_core` scoring engine.
//!
//! Market data, news sentiment, and report delivery are narrow traits so
//! callers can swap backends; one concrete implementation ships for each
//! where a sensible default exists (Yahoo Finance history, headline-count
//! sentiment, log-based delivery).

pub mod agent;
pub mod error;
pub mod market;
pub mod news;
pub mod report;
pub mod sink;
pub mod yahoo;

pub use stockagent_core;
pub use stockagent_core::{
    compute_indicators, overall_score, score, summarize, AnalysisError, IndicatorConfig,
    IndicatorSnapshot, PriceBar, Recommendation, RecommendationResult, SummaryStats,
};

pub use agent::{AgentConfig, StockAgent};
pub use error::AgentError;
pub use market::{MarketDataProvider, ProviderError};
pub use news::{headline_sentiment, NoNews, SentimentProvider};
pub use report::TickerReport;
pub use sink::{LogSink, ReportSink, SinkError};
pub use yahoo::YahooProvider;
