//! Yahoo Finance chart payloads and provider-neutral price history

use serde::Deserialize;

/// History window requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryRange {
    FiveDays,
    OneMonth,
    ThreeMonths,
    OneYear,
    TwoYears,
}

impl HistoryRange {
    /// Query value understood by the chart endpoint
    pub fn as_query(&self) -> &'static str {
        match self {
            HistoryRange::FiveDays => "5d",
            HistoryRange::OneMonth => "1mo",
            HistoryRange::ThreeMonths => "3mo",
            HistoryRange::OneYear => "1y",
            HistoryRange::TwoYears => "2y",
        }
    }
}

/// Daily OHLC candle
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCandle {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<f64>,
}

/// Ordered (oldest first) daily history for one symbol
#[derive(Debug, Clone, PartialEq)]
pub struct PriceHistory {
    pub symbol: String,
    pub candles: Vec<DailyCandle>,
}

impl PriceHistory {
    pub fn new(symbol: impl Into<String>, candles: Vec<DailyCandle>) -> Self {
        Self {
            symbol: symbol.into(),
            candles,
        }
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn last(&self) -> Option<&DailyCandle> {
        self.candles.last()
    }

    /// Close prices, oldest first
    pub fn closes(&self) -> Vec<f64> {
        self.candles.iter().map(|c| c.close).collect()
    }
}

/// Top-level chart response
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

/// Error object reported inside a chart payload
#[derive(Debug, Clone, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    #[serde(default)]
    pub quote: Vec<ChartQuote>,
}

/// Column-oriented OHLCV arrays; any entry may be null
#[derive(Debug, Default, Deserialize)]
pub struct ChartQuote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<f64>>,
}

impl ChartResult {
    /// Convert the column arrays into candles, skipping rows without a close.
    /// Missing open/high/low fall back to the close of the same row.
    pub fn into_candles(self) -> Vec<DailyCandle> {
        let Some(quote) = self.indicators.quote.into_iter().next() else {
            return Vec::new();
        };

        let cell = |column: &[Option<f64>], idx: usize| column.get(idx).copied().flatten();

        self.timestamp
            .iter()
            .enumerate()
            .filter_map(|(idx, ts)| {
                let close = cell(&quote.close, idx)?;
                Some(DailyCandle {
                    timestamp: *ts,
                    open: cell(&quote.open, idx).unwrap_or(close),
                    high: cell(&quote.high, idx).unwrap_or(close),
                    low: cell(&quote.low, idx).unwrap_or(close),
                    close,
                    volume: cell(&quote.volume, idx),
                })
            })
            .collect()
    }
}

/// Error types for provider operations
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP request error: {0}")]
    HttpRequestError(#[from] reqwest::Error),
    #[error("HTTP status error: {0} - {1}")]
    HttpStatusError(u16, String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Provider error {code}: {description}")]
    ApiError { code: String, description: String },
    #[error("No price history for {0}")]
    EmptyHistory(String),
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_without_close_are_skipped() {
        let payload = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1, 2, 3],
                    "indicators": {"quote": [{
                        "open": [10.0, null, 12.0],
                        "high": [11.0, null, 13.0],
                        "low": [9.0, null, null],
                        "close": [10.5, null, 12.5],
                        "volume": [100, null, null]
                    }]}
                }],
                "error": null
            }
        }"#;

        let response: ChartResponse = serde_json::from_str(payload).unwrap();
        let result = response.chart.result.unwrap().into_iter().next().unwrap();
        let candles = result.into_candles();

        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0].close, 10.5);
        assert_eq!(candles[0].volume, Some(100.0));
        assert_eq!(candles[1].timestamp, 3);
        assert_eq!(candles[1].low, 12.5);
        assert_eq!(candles[1].volume, None);
    }

    #[test]
    fn test_history_range_query_values() {
        assert_eq!(HistoryRange::FiveDays.as_query(), "5d");
        assert_eq!(HistoryRange::OneMonth.as_query(), "1mo");
        assert_eq!(HistoryRange::ThreeMonths.as_query(), "3mo");
        assert_eq!(HistoryRange::OneYear.as_query(), "1y");
        assert_eq!(HistoryRange::TwoYears.as_query(), "2y");
    }
}
