//! Yahoo Finance implementation of the market data provider.
//!
//! Fetches daily quote history and maps it onto core price bars, with an
//! in-memory per-(ticker, span) cache so repeated analyses in one run do
//! not refetch.

use chrono::NaiveDate;
use dashmap::DashMap;
use stockagent_core::PriceBar;
use time::OffsetDateTime;

use crate::market::{MarketDataProvider, ProviderError};

/// Convert a Unix timestamp from a quote to a calendar date.
pub fn timestamp_to_date(timestamp: i64) -> Result<NaiveDate, ProviderError> {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.date_naive())
        .ok_or_else(|| ProviderError::InvalidDate(timestamp.to_string()))
}

/// Convert chrono::NaiveDate to time::OffsetDateTime at UTC midnight, the
/// form the Yahoo history endpoint expects.
pub fn date_to_offset_datetime(date: NaiveDate) -> Result<OffsetDateTime, ProviderError> {
    let datetime = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| ProviderError::InvalidDate(date.to_string()))?;
    OffsetDateTime::from_unix_timestamp(datetime.and_utc().timestamp())
        .map_err(|_| ProviderError::InvalidDate(date.to_string()))
}

/// Yahoo Finance market data provider with history caching.
pub struct YahooProvider {
    connector: yahoo_finance_api::YahooConnector,
    cache: DashMap<(String, i64), Vec<PriceBar>>,
}

impl YahooProvider {
    /// Create a provider with default configuration.
    pub fn new() -> Result<Self, ProviderError> {
        let connector = yahoo_finance_api::YahooConnector::new()
            .map_err(|e| ProviderError::Upstream(e.to_string()))?;
        Ok(Self {
            connector,
            cache: DashMap::new(),
        })
    }

    /// Number of cached history entries (for testing).
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    #[cfg(test)]
    fn seed_history(&self, ticker: &str, days: i64, bars: Vec<PriceBar>) {
        self.cache.insert((ticker.to_string(), days), bars);
    }
}

impl MarketDataProvider for YahooProvider {
    async fn fetch_history(&self, ticker: &str, days: i64) -> Result<Vec<PriceBar>, ProviderError> {
        let key = (ticker.to_string(), days);
        if let Some(hit) = self.cache.get(&key) {
            tracing::debug!(ticker, days, "history cache hit");
            return Ok(hit.clone());
        }

        let end = OffsetDateTime::now_utc();
        let start = end - time::Duration::days(days);
        let response = self
            .connector
            .get_quote_history(ticker, start, end)
            .await
            .map_err(|e| ProviderError::Upstream(e.to_string()))?;
        let quotes = response
            .quotes()
            .map_err(|e| ProviderError::Upstream(e.to_string()))?;
        if quotes.is_empty() {
            return Err(ProviderError::NoData(ticker.to_string()));
        }

        let mut bars = Vec::with_capacity(quotes.len());
        for quote in &quotes {
            bars.push(PriceBar {
                date: timestamp_to_date(quote.timestamp as i64)?,
                open: quote.open,
                high: quote.high,
                low: quote.low,
                close: quote.close,
                volume: quote.volume,
            });
        }
        // The core requires date-ascending bars; enforce that here rather
        // than trusting the response order.
        bars.sort_by_key(|b| b.date);

        tracing::debug!(ticker, bars = bars.len(), "fetched history");
        self.cache.insert(key, bars.clone());
        Ok(bars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_history_serves_cache_hits() {
        let provider = YahooProvider::new().unwrap();
        assert_eq!(provider.cache_len(), 0);

        let bars = vec![PriceBar {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            open: 100.0,
            high: 101.0,
            low: 99.0,
            close: 100.5,
            volume: 150_000,
        }];
        provider.seed_history("ACME", 365, bars.clone());
        assert_eq!(provider.cache_len(), 1);

        // Served from the cache: no request leaves the process.
        let hit = provider.fetch_history("ACME", 365).await.unwrap();
        assert_eq!(hit, bars);
        assert_eq!(provider.cache_len(), 1);

        // A different span is a different cache key.
        provider.seed_history("ACME", 30, bars.clone());
        assert_eq!(provider.cache_len(), 2);
    }

    #[test]
    fn test_timestamp_to_date_epoch() {
        assert_eq!(
            timestamp_to_date(0).unwrap(),
            NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_timestamp_to_date_known_value() {
        // 2024-06-15 00:00:00 UTC
        assert_eq!(
            timestamp_to_date(1_718_409_600).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_date_to_offset_datetime_is_utc_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let result = date_to_offset_datetime(date).unwrap();
        assert_eq!(result.year(), 2024);
        assert_eq!(result.month() as u32, 1);
        assert_eq!(result.day(), 15);
        assert_eq!(result.hour(), 0);
        assert_eq!(result.minute(), 0);
        assert_eq!(result.offset().whole_hours(), 0);
    }

    #[test]
    fn test_roundtrip_conversion() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            NaiveDate::from_ymd_opt(2020, 2, 29).unwrap(), // leap day
        ];
        for date in dates {
            let offset = date_to_offset_datetime(date).unwrap();
            let back = timestamp_to_date(offset.unix_timestamp()).unwrap();
            assert_eq!(back, date, "roundtrip failed for {}", date);
        }
    }
}
