//! Per-run orchestration: fetch, score, summarize, render, deliver.

use tracing::{info, warn};

use stockagent_core::{compute_indicators, score, summarize, IndicatorConfig};

use crate::error::AgentError;
use crate::market::MarketDataProvider;
use crate::news::{headline_sentiment, SentimentProvider};
use crate::report::TickerReport;
use crate::sink::ReportSink;

/// Explicit per-run configuration, constructed once and passed in. The
/// agent never reads ambient or process-wide state.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub tickers: Vec<String>,
    /// Trailing calendar days of history to request per ticker.
    pub history_days: i64,
    /// Whether reports include the window high/low lines.
    pub include_price_range: bool,
    pub indicators: IndicatorConfig,
}

impl AgentConfig {
    /// One year of history with the full report layout.
    pub fn new(tickers: Vec<String>) -> Self {
        Self {
            tickers,
            history_days: 365,
            include_price_range: true,
            indicators: IndicatorConfig::default(),
        }
    }
}

/// Orchestrates one analysis run over the configured tickers.
///
/// Generic over its collaborators; no synchronization is needed because
/// the core holds no cross-call state.
pub struct StockAgent<M, N, S> {
    market: M,
    news: N,
    sink: S,
    config: AgentConfig,
}

impl<M, N, S> StockAgent<M, N, S>
where
    M: MarketDataProvider,
    N: SentimentProvider,
    S: ReportSink,
{
    pub fn new(market: M, news: N, sink: S, config: AgentConfig) -> Self {
        Self {
            market,
            news,
            sink,
            config,
        }
    }

    /// Analyze a single ticker into a report record.
    ///
    /// A news lookup failure degrades to a zero sentiment; only missing
    /// market data or an empty series aborts the ticker.
    pub async fn analyze_ticker(&self, ticker: &str) -> Result<TickerReport, AgentError> {
        let bars = self
            .market
            .fetch_history(ticker, self.config.history_days)
            .await
            .map_err(|source| AgentError::MarketData {
                ticker: ticker.to_string(),
                source,
            })?;

        let headlines = match self.news.headlines(ticker).await {
            Ok(headlines) => headlines,
            Err(e) => {
                warn!(ticker, error = %e, "news lookup failed, scoring without sentiment");
                Vec::new()
            }
        };
        let sentiment = headline_sentiment(&headlines);

        let stats = summarize(&bars)?;
        let snapshot = compute_indicators(&bars, &self.config.indicators);
        let result = score(&snapshot, sentiment);

        Ok(TickerReport {
            ticker: ticker.to_string(),
            recommendation: result.recommendation,
            rsi: result.rsi,
            current_price: stats.current_price,
            price_change: stats.price_change,
            percent_change: stats.percent_change,
            window_high: self.config.include_price_range.then_some(stats.window_high),
            window_low: self.config.include_price_range.then_some(stats.window_low),
            average_volume: stats.average_volume,
            sentiment,
            headlines,
        })
    }

    /// Run the whole batch and hand the compiled report to the sink.
    ///
    /// Per-ticker failures become error lines in the report and the batch
    /// continues. Delivery failure is logged, never retried here; the
    /// compiled report is returned either way.
    pub async fn run(&self) -> String {
        let mut report = String::new();
        for ticker in &self.config.tickers {
            let ticker = ticker.trim();
            match self.analyze_ticker(ticker).await {
                Ok(ticker_report) => {
                    info!(
                        ticker,
                        recommendation = %ticker_report.recommendation,
                        sentiment = ticker_report.sentiment,
                        "analysis complete"
                    );
                    report.push_str(&ticker_report.render());
                    report.push('\n');
                }
                Err(e) => {
                    warn!(ticker, error = %e, "analysis failed, continuing batch");
                    report.push_str(&format!("{}: Error - {}\n\n", ticker, e));
                }
            }
        }

        match self.sink.deliver(&report).await {
            Ok(()) => info!("report delivered"),
            Err(e) => warn!(error = %e, "report delivery failed"),
        }
        report
    }
}
