//! User Interface module
//!
//! Provides both the TUI dashboard and plain CLI output.

/// TUI application state and rendering
pub mod tui;

/// Simple CLI output functions
pub mod cli;

/// Color palette and display scaling
pub mod theme;

pub mod ui_manager;

use chrono::{DateTime, Local};

use crate::market_data::{GainersLosers, MarketSummary, SectorDelta};
use crate::sections::{MoversFilter, SectionContent, SectionKind, SectionView, SentimentData};

pub use cli::display_welcome_page;

/// Header status text before the first refresh completes
pub const STATUS_LOADING: &str = "Loading...";
pub const STATUS_REFRESHING: &str = "⏳ Refreshing data...";
pub const STATUS_REFRESHED: &str = "✓ Data refreshed successfully";

/// Refresh lifecycle of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    Idle,
    Refreshing,
}

/// Application state for UI components.
///
/// Owned by the UI loop; background tasks only reach it through queued events.
#[derive(Debug, Clone)]
pub struct AppState {
    pub should_quit: bool,
    pub phase: RefreshPhase,
    pub ticker: SectionView<MarketSummary>,
    pub movers: SectionView<GainersLosers>,
    pub movers_filter: MoversFilter,
    /// Inline indicator while only the movers panel is re-fetching
    pub movers_loading: bool,
    pub sentiment: SectionView<SentimentData>,
    pub sectoral: SectionView<Vec<SectorDelta>>,
    pub status: String,
    pub last_updated: Option<DateTime<Local>>,
    /// Index of the first visible section
    pub scroll: usize,
    pub animation_frame: usize,
    pub completed_refreshes: u64,
    pub coalesced_requests: u64,
}

impl AppState {
    /// Create new application state
    pub fn new(movers_filter: MoversFilter) -> Self {
        Self {
            should_quit: false,
            phase: RefreshPhase::Idle,
            ticker: SectionView::Loading,
            movers: SectionView::Loading,
            movers_filter,
            movers_loading: false,
            sentiment: SectionView::Loading,
            sectoral: SectionView::Loading,
            status: STATUS_LOADING.to_string(),
            last_updated: None,
            scroll: 0,
            animation_frame: 0,
            completed_refreshes: 0,
            coalesced_requests: 0,
        }
    }

    pub fn is_refreshing(&self) -> bool {
        self.phase == RefreshPhase::Refreshing
    }

    /// Idle -> Refreshing. Returns `false` when a refresh is already running.
    pub fn begin_refresh(&mut self) -> bool {
        if self.is_refreshing() {
            self.coalesced_requests += 1;
            return false;
        }

        self.phase = RefreshPhase::Refreshing;
        self.status = STATUS_REFRESHING.to_string();
        self.animation_frame = 0;
        true
    }

    /// Refreshing -> Idle after every section was delivered
    pub fn finish_refresh(&mut self, at: DateTime<Local>) {
        self.phase = RefreshPhase::Idle;
        self.last_updated = Some(at);
        self.status = STATUS_REFRESHED.to_string();
        self.completed_refreshes += 1;
    }

    /// Refreshing -> Idle when the worker died; keeps the previous timestamp
    pub fn fail_refresh(&mut self, message: &str) {
        self.phase = RefreshPhase::Idle;
        self.status = format!("❌ Error: {}", message);
    }

    /// Swap in new section content.
    ///
    /// Movers results computed for a filter other than the current one are
    /// dropped; returns `false` in that case.
    pub fn apply(&mut self, content: SectionContent) -> bool {
        match content {
            SectionContent::Ticker(view) => self.ticker = view,
            SectionContent::GainersLosers { filter, view } => {
                if filter != self.movers_filter {
                    return false;
                }
                self.movers = view;
                self.movers_loading = false;
            }
            SectionContent::Sentiment(view) => self.sentiment = view,
            SectionContent::Sectoral(view) => self.sectoral = view,
        }
        true
    }

    /// Move to the next universe and return the filter to fetch
    pub fn cycle_universe(&mut self) -> MoversFilter {
        self.movers_filter.universe = self.movers_filter.universe.next();
        self.movers_loading = true;
        self.movers_filter
    }

    /// Move to the next period and return the filter to fetch
    pub fn cycle_period(&mut self) -> MoversFilter {
        self.movers_filter.period = self.movers_filter.period.next();
        self.movers_loading = true;
        self.movers_filter
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(SectionKind::ALL.len() - 1);
    }

    /// Sections from the scroll position down
    pub fn visible_sections(&self) -> &'static [SectionKind] {
        &SectionKind::ALL[self.scroll.min(SectionKind::ALL.len() - 1)..]
    }

    pub fn advance_animation(&mut self) {
        self.animation_frame = (self.animation_frame + 1) % 3;
    }

    /// Overlay text with one to three trailing dots
    pub fn loading_text(&self) -> String {
        format!("Loading market data{}", ".".repeat(self.animation_frame % 3 + 1))
    }

    pub fn last_updated_label(&self) -> String {
        match self.last_updated {
            Some(at) => format!("Last Updated: {}", at.format("%Y-%m-%d %H:%M:%S")),
            None => "Last Updated: Never".to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MoversFilter::default())
    }
}
