//! Dashboard sections
//!
//! A section knows how to refresh itself: [`Section::update`] runs on the refresh
//! worker, fetches through the [`DataFetcher`] and returns a complete replacement
//! [`SectionContent`]. The UI loop swaps that value in with one assignment, so a
//! half-built section is never drawn.

mod gainers_losers;
mod sectoral;
mod sentiment;
mod ticker;

use async_trait::async_trait;
use tracing::warn;

use crate::config::MarketConfig;
use crate::market_data::{
    DataFetcher, GainersLosers, IndexQuote, MarketSummary, Period, SectorDelta, SentimentScore,
    Universe,
};

pub use gainers_losers::GainersLosersSection;
pub use sectoral::SectoralSection;
pub use sentiment::SentimentSection;
pub use ticker::TickerSection;

pub const TICKER_ERROR: &str = "Unable to fetch index data. Please check your connection.";
pub const MOVERS_ERROR: &str = "No stock data available for this index.";
pub const SECTORAL_ERROR: &str = "No sectoral data available";
pub const VIX_UNAVAILABLE: &str = "Data unavailable";

/// Identifies a dashboard panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Ticker,
    GainersLosers,
    Sentiment,
    Sectoral,
}

impl SectionKind {
    /// Panels in top-to-bottom order
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Ticker,
        SectionKind::GainersLosers,
        SectionKind::Sentiment,
        SectionKind::Sectoral,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Ticker => "📈 Index Tickers",
            SectionKind::GainersLosers => "🔥 Top Gainers & Losers",
            SectionKind::Sentiment => "😰 Market Sentiment",
            SectionKind::Sectoral => "🏭 Sectoral Performance",
        }
    }
}

/// Render state of one section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionView<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for SectionView<T> {
    fn default() -> Self {
        SectionView::Loading
    }
}

impl<T> SectionView<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, SectionView::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SectionView::Failed(_))
    }
}

/// User selection driving the gainers/losers panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoversFilter {
    pub universe: Universe,
    pub period: Period,
    pub limit: usize,
}

impl Default for MoversFilter {
    fn default() -> Self {
        Self {
            universe: Universe::default(),
            period: Period::default(),
            limit: 10,
        }
    }
}

impl MoversFilter {
    /// Startup selection from configuration; unknown names fall back to defaults
    pub fn from_config(config: &MarketConfig) -> Self {
        let filter = Self {
            limit: config
                .gainers_limit
                .clamp(1, config.max_universe_symbols.max(1)),
            ..Self::default()
        };

        filter.with_selection(
            Some(config.default_universe.as_str()),
            Some(config.default_period.as_str()),
        )
    }

    /// Override universe and period by name.
    ///
    /// Unknown universes fall back to NIFTY50 and unknown periods to 1D.
    pub fn with_selection(mut self, universe: Option<&str>, period: Option<&str>) -> Self {
        if let Some(name) = universe {
            self.universe = name.parse().unwrap_or_else(|e| {
                warn!("{}, using {}", e, Universe::default());
                Universe::default()
            });
        }

        if let Some(label) = period {
            self.period = label.parse().unwrap_or_else(|e| {
                warn!("{}, using {}", e, Period::default());
                Period::default()
            });
        }

        self
    }
}

/// VIX quote and fear/greed reading shown together
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentData {
    pub vix: Option<IndexQuote>,
    pub score: SentimentScore,
}

/// Complete replacement content for one section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Ticker(SectionView<MarketSummary>),
    GainersLosers {
        filter: MoversFilter,
        view: SectionView<GainersLosers>,
    },
    Sentiment(SectionView<SentimentData>),
    Sectoral(SectionView<Vec<SectorDelta>>),
}

impl SectionContent {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionContent::Ticker(_) => SectionKind::Ticker,
            SectionContent::GainersLosers { .. } => SectionKind::GainersLosers,
            SectionContent::Sentiment(_) => SectionKind::Sentiment,
            SectionContent::Sectoral(_) => SectionKind::Sectoral,
        }
    }

    /// Whether the section ended up showing its error placeholder
    pub fn is_failed(&self) -> bool {
        match self {
            SectionContent::Ticker(view) => view.is_failed(),
            SectionContent::GainersLosers { view, .. } => view.is_failed(),
            SectionContent::Sentiment(view) => view.is_failed(),
            SectionContent::Sectoral(view) => view.is_failed(),
        }
    }
}

/// A refreshable dashboard panel
#[async_trait]
pub trait Section: Send + Sync {
    fn kind(&self) -> SectionKind;

    /// Fetch and build the full replacement content for this section
    async fn update(&self, fetcher: &DataFetcher) -> SectionContent;
}

/// All sections in display order, with the movers panel bound to `filter`
pub fn dashboard_sections(filter: MoversFilter) -> Vec<Box<dyn Section>> {
    vec![
        Box::new(TickerSection),
        Box::new(GainersLosersSection::new(filter)),
        Box::new(SentimentSection),
        Box::new(SectoralSection),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MockQuoteSource;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_sections_fall_back_to_placeholders() {
        let fetcher = DataFetcher::new(Arc::new(MockQuoteSource::failing()));

        let mut contents = Vec::new();
        for section in dashboard_sections(MoversFilter::default()) {
            contents.push(section.update(&fetcher).await);
        }

        assert_eq!(
            contents[0],
            SectionContent::Ticker(SectionView::Failed(TICKER_ERROR.to_string()))
        );
        assert_eq!(
            contents[1],
            SectionContent::GainersLosers {
                filter: MoversFilter::default(),
                view: SectionView::Failed(MOVERS_ERROR.to_string()),
            }
        );
        match &contents[2] {
            SectionContent::Sentiment(SectionView::Ready(data)) => {
                assert!(data.vix.is_none());
                assert_eq!(data.score, SentimentScore::neutral());
            }
            other => panic!("unexpected sentiment content: {:?}", other),
        }
        assert_eq!(
            contents[3],
            SectionContent::Sectoral(SectionView::Failed(SECTORAL_ERROR.to_string()))
        );
    }

    #[test]
    fn test_filter_from_config() {
        let config = MarketConfig {
            default_universe: "banknifty".to_string(),
            default_period: "bogus".to_string(),
            gainers_limit: 5,
            ..MarketConfig::default()
        };
        let filter = MoversFilter::from_config(&config);
        assert_eq!(filter.universe, Universe::BankNifty);
        assert_eq!(filter.period, Period::OneDay);
        assert_eq!(filter.limit, 5);

        let config = MarketConfig {
            gainers_limit: 65535,
            max_universe_symbols: 30,
            ..MarketConfig::default()
        };
        assert_eq!(MoversFilter::from_config(&config).limit, 30);
    }

    #[test]
    fn test_selection_falls_back_on_unknown_names() {
        let filter = MoversFilter {
            universe: Universe::Sensex,
            period: Period::OneMonth,
            limit: 10,
        };

        let unknown = filter.with_selection(Some("NASDAQ"), Some("2Days"));
        assert_eq!(unknown.universe, Universe::Nifty50);
        assert_eq!(unknown.period, Period::OneDay);

        let known = filter.with_selection(Some("midcap100"), Some("6months"));
        assert_eq!(known.universe, Universe::Midcap100);
        assert_eq!(known.period, Period::SixMonths);

        assert_eq!(filter.with_selection(None, None), filter);
    }
}
