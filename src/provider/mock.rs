//! Scripted quote source for testing and offline runs

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::sleep;

use super::QuoteSource;
use super::types::{DailyCandle, HistoryRange, PriceHistory, ProviderError};

const SECONDS_PER_DAY: i64 = 86_400;

/// In-memory [`QuoteSource`] returning preset histories
#[derive(Debug, Default)]
pub struct MockQuoteSource {
    histories: HashMap<String, Vec<DailyCandle>>,
    failing_symbols: HashSet<String>,
    fail_all: bool,
    latency: Option<Duration>,
    calls: AtomicUsize,
}

impl MockQuoteSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source whose every request fails, as if the network were down
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Register a daily close series (oldest first); OHLC collapse onto the close
    pub fn with_closes(mut self, symbol: &str, closes: &[f64]) -> Self {
        let candles = closes
            .iter()
            .enumerate()
            .map(|(idx, close)| DailyCandle {
                timestamp: idx as i64 * SECONDS_PER_DAY,
                open: *close,
                high: *close,
                low: *close,
                close: *close,
                volume: Some(1_000.0),
            })
            .collect();
        self.histories.insert(symbol.to_string(), candles);
        self
    }

    /// Register full candles for a symbol
    pub fn with_candles(mut self, symbol: &str, candles: Vec<DailyCandle>) -> Self {
        self.histories.insert(symbol.to_string(), candles);
        self
    }

    /// Make requests for one symbol fail
    pub fn fail_symbol(mut self, symbol: &str) -> Self {
        self.failing_symbols.insert(symbol.to_string());
        self
    }

    /// Delay every response
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Number of history requests served or refused so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn window(range: HistoryRange) -> usize {
        match range {
            HistoryRange::FiveDays => 5,
            HistoryRange::OneMonth => 22,
            HistoryRange::ThreeMonths => 63,
            HistoryRange::OneYear => 252,
            HistoryRange::TwoYears => 504,
        }
    }
}

#[async_trait]
impl QuoteSource for MockQuoteSource {
    async fn history(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<PriceHistory, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            sleep(latency).await;
        }

        if self.fail_all || self.failing_symbols.contains(symbol) {
            return Err(ProviderError::NetworkError(format!(
                "simulated failure for {}",
                symbol
            )));
        }

        let candles = self
            .histories
            .get(symbol)
            .filter(|candles| !candles.is_empty())
            .ok_or_else(|| ProviderError::EmptyHistory(symbol.to_string()))?;

        let start = candles.len().saturating_sub(Self::window(range));
        Ok(PriceHistory::new(symbol, candles[start..].to_vec()))
    }
}
