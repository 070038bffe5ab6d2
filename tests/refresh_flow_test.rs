//! Refresh orchestration through the UI event queue

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use bazaar::config::Config;
use bazaar::market_data::{DataFetcher, SECTORS, Universe};
use bazaar::provider::MockQuoteSource;
use bazaar::sections::{
    MOVERS_ERROR, SECTORAL_ERROR, SectionView, TICKER_ERROR,
};
use bazaar::session::{ActionChannel, RefreshTrigger, UiEvent};
use bazaar::ui::STATUS_REFRESHED;
use bazaar::ui::ui_manager::UIManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::time::timeout;

fn test_config() -> Config {
    let mut config = Config::default();
    config.refresh.section_pacing_ms = 1;
    config
}

fn ui_manager(source: Arc<MockQuoteSource>) -> Result<UIManager> {
    let mut channel = ActionChannel::new();
    UIManager::new(DataFetcher::new(source), &mut channel, &test_config())
}

fn refresh_request(trigger: RefreshTrigger) -> UiEvent {
    UiEvent::RefreshRequested { trigger }
}

/// Apply queued events until the running refresh completes
async fn drain_refresh(ui: &mut UIManager) {
    timeout(Duration::from_secs(10), async {
        while ui.app_state().is_refreshing() {
            assert!(ui.process_next_event().await, "UI queue closed mid-refresh");
        }
    })
    .await
    .expect("refresh should finish within 10 seconds");
}

fn sector_source() -> MockQuoteSource {
    SECTORS
        .iter()
        .fold(MockQuoteSource::new(), |source, (_, symbol)| {
            source.with_closes(symbol, &[100.0, 101.0])
        })
}

#[tokio::test]
async fn test_offline_refresh_shows_placeholders() -> Result<()> {
    let mut ui = ui_manager(Arc::new(MockQuoteSource::failing()))?;

    ui.handle_event(refresh_request(RefreshTrigger::User));
    assert!(ui.app_state().is_refreshing());
    drain_refresh(&mut ui).await;

    let app = ui.app_state();
    assert_eq!(app.ticker, SectionView::Failed(TICKER_ERROR.to_string()));
    assert_eq!(app.movers, SectionView::Failed(MOVERS_ERROR.to_string()));
    assert_eq!(app.sectoral, SectionView::Failed(SECTORAL_ERROR.to_string()));
    match &app.sentiment {
        SectionView::Ready(data) => {
            assert!(data.vix.is_none());
            assert_eq!(data.score.score, 50.0);
        }
        other => panic!("unexpected sentiment view: {:?}", other),
    }

    assert!(app.last_updated.is_some());
    assert_eq!(app.status, STATUS_REFRESHED);
    Ok(())
}

#[tokio::test]
async fn test_rapid_refresh_requests_are_coalesced() -> Result<()> {
    let source = Arc::new(MockQuoteSource::new().with_latency(Duration::from_millis(2)));
    let mut ui = ui_manager(source.clone())?;

    ui.handle_event(refresh_request(RefreshTrigger::Startup));
    for _ in 0..4 {
        ui.handle_event(refresh_request(RefreshTrigger::Timer));
        ui.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));
    }
    assert_eq!(ui.app_state().coalesced_requests, 8);

    drain_refresh(&mut ui).await;
    assert_eq!(ui.app_state().completed_refreshes, 1);

    // three index quotes, thirty equities, VIX twice plus NIFTY, ten sectors
    assert_eq!(source.calls(), 3 + 30 + 3 + SECTORS.len());

    // once idle, a new request starts a new cycle
    ui.handle_event(refresh_request(RefreshTrigger::User));
    assert!(ui.app_state().is_refreshing());
    drain_refresh(&mut ui).await;
    assert_eq!(ui.app_state().completed_refreshes, 2);
    Ok(())
}

#[tokio::test]
async fn test_sections_swap_one_at_a_time() -> Result<()> {
    let mut ui = ui_manager(Arc::new(sector_source()))?;

    ui.handle_event(refresh_request(RefreshTrigger::Startup));
    drain_refresh(&mut ui).await;
    let first_sectoral = ui.app_state().sectoral.clone();
    assert!(first_sectoral.is_ready());

    ui.handle_event(refresh_request(RefreshTrigger::Timer));
    assert!(ui.process_next_event().await);

    // only the ticker has been replaced so far; the rest keep the last complete value
    assert!(ui.app_state().is_refreshing());
    assert_eq!(ui.app_state().sectoral, first_sectoral);

    drain_refresh(&mut ui).await;
    assert_eq!(ui.app_state().sectoral, first_sectoral);
    Ok(())
}

#[tokio::test]
async fn test_stale_movers_update_is_dropped() -> Result<()> {
    let source = Universe::Sensex
        .symbols()
        .iter()
        .fold(MockQuoteSource::new(), |source, symbol| {
            source.with_closes(symbol, &[100.0, 102.0])
        })
        .with_latency(Duration::from_millis(1));
    let mut ui = ui_manager(Arc::new(source))?;

    let press = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
    ui.handle_key(press('i'));
    assert_eq!(ui.app_state().movers_filter.universe, Universe::NiftyNext50);
    ui.handle_key(press('i'));
    assert_eq!(ui.app_state().movers_filter.universe, Universe::Sensex);
    assert!(ui.app_state().movers_loading);

    timeout(Duration::from_secs(10), async {
        for _ in 0..2 {
            assert!(ui.process_next_event().await);
        }
    })
    .await?;

    let app = ui.app_state();
    assert!(!app.movers_loading);
    match &app.movers {
        SectionView::Ready(movers) => {
            assert_eq!(movers.gainers.len(), 10);
            assert!(movers.gainers.iter().all(|s| (s.change_pct - 2.0).abs() < 1e-9));
        }
        other => panic!("unexpected movers view: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn test_shutdown_event_stops_loop() -> Result<()> {
    let mut ui = ui_manager(Arc::new(MockQuoteSource::new()))?;
    ui.handle_event(UiEvent::ShutdownRequested);
    assert!(ui.app_state().should_quit);
    Ok(())
}
