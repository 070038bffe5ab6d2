use async_trait::async_trait;

use super::{MOVERS_ERROR, MoversFilter, Section, SectionContent, SectionKind, SectionView};
use crate::market_data::DataFetcher;

/// Top movers of the selected universe over the selected period
pub struct GainersLosersSection {
    filter: MoversFilter,
}

impl GainersLosersSection {
    pub fn new(filter: MoversFilter) -> Self {
        Self { filter }
    }
}

#[async_trait]
impl Section for GainersLosersSection {
    fn kind(&self) -> SectionKind {
        SectionKind::GainersLosers
    }

    async fn update(&self, fetcher: &DataFetcher) -> SectionContent {
        let movers = fetcher
            .get_gainers_losers(self.filter.universe, self.filter.period, self.filter.limit)
            .await;

        let view = if movers.is_empty() {
            SectionView::Failed(MOVERS_ERROR.to_string())
        } else {
            SectionView::Ready(movers)
        };

        SectionContent::GainersLosers {
            filter: self.filter,
            view,
        }
    }
}
