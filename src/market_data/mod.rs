//! Market data fetching and derivation module
//!
//! [`DataFetcher`] is the single point where provider errors are logged and
//! degraded to empty results, so callers never see a failure.

pub mod analytics;
pub mod types;
pub mod universe;

use chrono::{Local, NaiveDateTime};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::MarketConfig;
use crate::provider::{HistoryRange, PriceHistory, QuoteSource};

pub use analytics::{compute_sentiment, market_status_at, period_change, rank_movers};
pub use types::*;
pub use universe::{SECTORS, Universe, display_symbol};

/// Default cap on symbols ranked per universe
pub const DEFAULT_MAX_UNIVERSE_SYMBOLS: usize = 30;

/// Fetches provider history and turns it into dashboard data
#[derive(Clone)]
pub struct DataFetcher {
    source: Arc<dyn QuoteSource>,
    max_universe_symbols: usize,
}

impl DataFetcher {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self {
            source,
            max_universe_symbols: DEFAULT_MAX_UNIVERSE_SYMBOLS,
        }
    }

    pub fn with_market_config(source: Arc<dyn QuoteSource>, config: &MarketConfig) -> Self {
        Self {
            source,
            max_universe_symbols: config.max_universe_symbols.max(1),
        }
    }

    async fn history(&self, symbol: &str, range: HistoryRange) -> Option<PriceHistory> {
        match self.source.history(symbol, range).await {
            Ok(history) => Some(history),
            Err(e) => {
                warn!("Error fetching {}: {}", symbol, e);
                None
            }
        }
    }

    /// Latest quote for an index, `None` when the fetch fails
    pub async fn get_index_data(&self, index: MarketIndex) -> Option<IndexQuote> {
        let history = self.history(index.symbol(), HistoryRange::FiveDays).await?;
        analytics::quote_from_history(index.name(), &history)
    }

    /// Quote lookup by display name; unknown names yield `None`
    pub async fn get_index_data_by_name(&self, name: &str) -> Option<IndexQuote> {
        match name.parse::<MarketIndex>() {
            Ok(index) => self.get_index_data(index).await,
            Err(e) => {
                debug!("{}", e);
                None
            }
        }
    }

    /// Main index quotes plus session status from the local clock
    pub async fn get_market_summary(&self) -> MarketSummary {
        self.get_market_summary_at(Local::now().naive_local()).await
    }

    pub async fn get_market_summary_at(&self, now: NaiveDateTime) -> MarketSummary {
        let mut quotes = Vec::with_capacity(MAIN_INDICES.len());
        for index in MAIN_INDICES {
            if let Some(quote) = self.get_index_data(index).await {
                quotes.push(quote);
            }
        }

        MarketSummary {
            quotes,
            status: market_status_at(now),
        }
    }

    /// Rank the capped universe by change over `period`
    pub async fn get_gainers_losers(
        &self,
        universe: Universe,
        period: Period,
        limit: usize,
    ) -> GainersLosers {
        let range = period.history_range();
        let mut deltas = Vec::new();

        for symbol in universe.symbols().iter().take(self.max_universe_symbols) {
            let Some(history) = self.history(symbol, range).await else {
                continue;
            };

            match period_change(&history.closes(), period) {
                Some((price, change_pct)) => deltas.push(StockDelta {
                    symbol: display_symbol(symbol),
                    price,
                    change_pct,
                }),
                None => debug!(
                    "Skipping {}: {} closes are not enough for {}",
                    symbol,
                    history.len(),
                    period
                ),
            }
        }

        info!(
            "Ranked {} symbols of {} over {}",
            deltas.len(),
            universe,
            period
        );

        rank_movers(deltas, limit)
    }

    pub async fn get_vix_data(&self) -> Option<IndexQuote> {
        self.get_index_data(MarketIndex::Vix).await
    }

    /// Heuristic fear/greed reading from VIX level and NIFTY momentum
    pub async fn get_fear_greed_index(&self) -> SentimentScore {
        let vix = self.get_vix_data().await;
        let nifty = self.get_index_data(MarketIndex::Nifty50).await;

        match (vix, nifty) {
            (Some(vix), Some(nifty)) => compute_sentiment(vix.price, nifty.change_pct),
            _ => {
                warn!("Sentiment inputs unavailable, reporting neutral");
                SentimentScore::neutral()
            }
        }
    }

    /// One-day change per sector, best first
    pub async fn get_sectoral_performance(&self) -> Vec<SectorDelta> {
        let mut sectors = Vec::with_capacity(SECTORS.len());

        for (sector, symbol) in SECTORS {
            let Some(history) = self.history(symbol, HistoryRange::FiveDays).await else {
                continue;
            };

            if let Some((price, change_pct)) = period_change(&history.closes(), Period::OneDay) {
                sectors.push(SectorDelta {
                    sector: sector.to_string(),
                    price,
                    change_pct,
                });
            }
        }

        sectors.sort_by(|a, b| b.change_pct.total_cmp(&a.change_pct));
        sectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockQuoteSource;

    fn fetcher(source: MockQuoteSource) -> DataFetcher {
        DataFetcher::new(Arc::new(source))
    }

    #[tokio::test]
    async fn test_index_data_failure_is_none() {
        let fetcher = fetcher(MockQuoteSource::failing());
        assert!(fetcher.get_index_data(MarketIndex::Nifty50).await.is_none());
        assert!(fetcher.get_index_data_by_name("UNKNOWN").await.is_none());
    }

    #[tokio::test]
    async fn test_fear_greed_defaults_to_neutral() {
        let fetcher = fetcher(MockQuoteSource::new().with_closes("^NSEI", &[100.0, 101.0]));
        assert_eq!(fetcher.get_fear_greed_index().await, SentimentScore::neutral());
    }

    #[tokio::test]
    async fn test_universe_is_capped() {
        let source = Arc::new(MockQuoteSource::new());
        let fetcher = DataFetcher::new(source.clone());

        fetcher
            .get_gainers_losers(Universe::Midcap100, Period::OneDay, 10)
            .await;
        assert_eq!(source.calls(), DEFAULT_MAX_UNIVERSE_SYMBOLS);

        let config = MarketConfig {
            max_universe_symbols: 4,
            ..MarketConfig::default()
        };
        let source = Arc::new(MockQuoteSource::new());
        let fetcher = DataFetcher::with_market_config(source.clone(), &config);
        fetcher
            .get_gainers_losers(Universe::BankNifty, Period::OneDay, 10)
            .await;
        assert_eq!(source.calls(), 4);
    }
}
