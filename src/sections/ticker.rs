use async_trait::async_trait;

use super::{Section, SectionContent, SectionKind, SectionView, TICKER_ERROR};
use crate::market_data::DataFetcher;

/// NIFTY50, BANKNIFTY and SENSEX cards plus market status
pub struct TickerSection;

#[async_trait]
impl Section for TickerSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Ticker
    }

    async fn update(&self, fetcher: &DataFetcher) -> SectionContent {
        let summary = fetcher.get_market_summary().await;

        let view = if summary.quotes.is_empty() {
            SectionView::Failed(TICKER_ERROR.to_string())
        } else {
            SectionView::Ready(summary)
        };

        SectionContent::Ticker(view)
    }
}
