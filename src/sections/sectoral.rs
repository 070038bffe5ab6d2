use async_trait::async_trait;

use super::{SECTORAL_ERROR, Section, SectionContent, SectionKind, SectionView};
use crate::market_data::DataFetcher;

/// One-day performance bars per sector
pub struct SectoralSection;

#[async_trait]
impl Section for SectoralSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Sectoral
    }

    async fn update(&self, fetcher: &DataFetcher) -> SectionContent {
        let sectors = fetcher.get_sectoral_performance().await;

        let view = if sectors.is_empty() {
            SectionView::Failed(SECTORAL_ERROR.to_string())
        } else {
            SectionView::Ready(sectors)
        };

        SectionContent::Sectoral(view)
    }
}
