//! Report delivery boundary.

use thiserror::Error;

/// Errors from report delivery.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("report delivery failed: {0}")]
    Delivery(String),
}

/// Consumer of a fully rendered report. The agent depends only on this
/// trait, never on a delivery mechanism.
#[allow(async_fn_in_trait)]
pub trait ReportSink {
    async fn deliver(&self, report: &str) -> Result<(), SinkError>;
}

/// Default sink: emits the report through `tracing` instead of sending it
/// anywhere.
pub struct LogSink;

impl ReportSink for LogSink {
    async fn deliver(&self, report: &str) -> Result<(), SinkError> {
        tracing::info!(bytes = report.len(), "report ready\n{}", report);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_sink_always_succeeds() {
        assert!(LogSink.deliver("ACME: Hold\n").await.is_ok());
    }

    #[test]
    fn test_sink_error_display() {
        let e = SinkError::Delivery("socket closed".to_string());
        assert_eq!(e.to_string(), "report delivery failed: socket closed");
    }
}
