use async_trait::async_trait;

use super::{Section, SectionContent, SectionKind, SectionView, SentimentData};
use crate::market_data::DataFetcher;

/// India VIX card and the greed meter
pub struct SentimentSection;

#[async_trait]
impl Section for SentimentSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Sentiment
    }

    // The meter always has a reading (neutral on failure); a missing VIX quote
    // is shown inside the VIX card instead of failing the whole panel.
    async fn update(&self, fetcher: &DataFetcher) -> SectionContent {
        let vix = fetcher.get_vix_data().await;
        let score = fetcher.get_fear_greed_index().await;

        SectionContent::Sentiment(SectionView::Ready(SentimentData { vix, score }))
    }
}
