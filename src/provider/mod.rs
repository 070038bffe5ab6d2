//! Market-data provider integration module
//!
//! Wraps the Yahoo Finance chart endpoint behind the [`QuoteSource`] trait so the
//! data layer can be exercised against a scripted source in tests.

pub mod mock;
pub mod rest;
pub mod types;

use async_trait::async_trait;

// Re-export commonly used types
pub use mock::MockQuoteSource;
pub use rest::YahooChartClient;
pub use types::*;

/// Source of daily OHLC history keyed by provider symbol
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Fetch daily candles for `symbol` covering `range`, oldest first
    async fn history(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<PriceHistory, ProviderError>;
}
