//! Yahoo Finance chart REST client implementation

use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

use super::QuoteSource;
use super::types::{ChartResponse, HistoryRange, PriceHistory, ProviderError};
use crate::config::ProviderConfig;

/// Yahoo Finance chart API client
pub struct YahooChartClient {
    base_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl YahooChartClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration, user_agent: &str) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(user_agent.to_string())
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: base_url.into(),
            timeout,
            client,
        }
    }

    /// Build a client from the provider section of the configuration
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_seconds),
            &config.user_agent,
        )
    }

    fn chart_url(&self, symbol: &str) -> Result<Url, ProviderError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProviderError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| ProviderError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        Ok(url)
    }

    /// Fetch daily chart history for a symbol
    pub async fn get_chart(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<PriceHistory, ProviderError> {
        let url = self.chart_url(symbol)?;

        debug!("Fetching {} history from: {}", range.as_query(), url);

        let response = self
            .client
            .get(url)
            .query(&[("range", range.as_query()), ("interval", "1d")])
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::HttpStatusError(status.as_u16(), body));
        }

        let payload: ChartResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(format!("chart for {}: {}", symbol, e)))?;

        if let Some(error) = payload.chart.error {
            return Err(ProviderError::ApiError {
                code: error.code,
                description: error.description,
            });
        }

        let result = payload
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| ProviderError::EmptyHistory(symbol.to_string()))?;

        let candles = result.into_candles();
        if candles.is_empty() {
            return Err(ProviderError::EmptyHistory(symbol.to_string()));
        }

        debug!("Fetched {} candles for {}", candles.len(), symbol);

        Ok(PriceHistory::new(symbol, candles))
    }
}

#[async_trait]
impl QuoteSource for YahooChartClient {
    async fn history(
        &self,
        symbol: &str,
        range: HistoryRange,
    ) -> Result<PriceHistory, ProviderError> {
        self.get_chart(symbol, range).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_url_appends_symbol_segment() {
        let client = YahooChartClient::new(
            "https://query1.finance.yahoo.com/",
            Duration::from_secs(5),
            "bazaar-test",
        );
        let url = client.chart_url("RELIANCE.NS").unwrap();
        assert_eq!(
            url.as_str(),
            "https://query1.finance.yahoo.com/v8/finance/chart/RELIANCE.NS"
        );
    }

    #[test]
    fn test_chart_url_rejects_invalid_base() {
        let client = YahooChartClient::new("not a url", Duration::from_secs(5), "bazaar-test");
        assert!(matches!(
            client.chart_url("TCS.NS"),
            Err(ProviderError::InvalidUrl(_))
        ));
    }
}
