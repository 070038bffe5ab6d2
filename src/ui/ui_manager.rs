//! UI Manager for the dashboard event loop

use anyhow::Result;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crossterm::event::{self, Event, KeyEvent};

use crate::config::Config;
use crate::market_data::DataFetcher;
use crate::sections::MoversFilter;
use crate::session::action_channel::{ActionChannel, UiEvent};
use crate::session::refresh::RefreshWorker;

use super::AppState;
use super::theme::Theme;
use super::tui::{Tui, UiAction, handle_key_event, handle_mouse_event};

/// Interval between loading-dot frames
const ANIMATION_INTERVAL: Duration = Duration::from_millis(500);

/// UI Manager for managing the terminal interface
pub struct UIManager {
    /// Application state
    app_state: AppState,
    /// Palette and scaling
    theme: Theme,
    /// Spawns refresh work off the UI loop
    worker: RefreshWorker,
    /// Sender side of the UI queue, used for Ctrl+C
    event_tx: mpsc::UnboundedSender<UiEvent>,
    /// UI queue receiver
    event_rx: mpsc::UnboundedReceiver<UiEvent>,
    /// TUI terminal handle
    tui: Option<Tui>,
    /// Redraw cadence when nothing changed
    tick_rate: Duration,
    should_redraw: bool,
    last_render: Instant,
    last_animation: Instant,
}

impl UIManager {
    /// Create a UI manager that drains `action_channel`
    pub fn new(
        fetcher: DataFetcher,
        action_channel: &mut ActionChannel,
        config: &Config,
    ) -> Result<Self> {
        let event_rx = action_channel
            .event_rx()
            .ok_or_else(|| anyhow::anyhow!("UI event receiver already taken"))?;
        let event_tx = action_channel.event_tx();

        let worker = RefreshWorker::new(
            fetcher,
            event_tx.clone(),
            Duration::from_millis(config.refresh.section_pacing_ms),
        );

        Ok(Self {
            app_state: AppState::new(MoversFilter::from_config(&config.market)),
            theme: Theme::from_config(&config.ui),
            worker,
            event_tx,
            event_rx,
            tui: None,
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms.clamp(16, 1000)),
            should_redraw: true,
            last_render: Instant::now(),
            last_animation: Instant::now(),
        })
    }

    pub fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Run the UI manager
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting UI manager");

        self.run_ui_loop().await?;

        info!("UI manager stopped");
        Ok(())
    }

    /// Main UI rendering loop
    async fn run_ui_loop(&mut self) -> Result<()> {
        let shutdown_tx = self.event_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
                return;
            }

            tracing::info!("Ctrl+C received, initiating shutdown");
            let _ = shutdown_tx.send(UiEvent::ShutdownRequested);
        });

        self.tui =
            Some(Tui::new().map_err(|e| anyhow::anyhow!("Failed to initialise terminal: {}", e))?);
        self.should_redraw = true;

        while !self.app_state.should_quit {
            // Apply queued results from background tasks
            self.process_events();

            // Handle terminal input (non-blocking)
            self.poll_terminal_events()?;

            let now = Instant::now();
            if self.app_state.is_refreshing()
                && now.duration_since(self.last_animation) >= ANIMATION_INTERVAL
            {
                self.app_state.advance_animation();
                self.last_animation = now;
                self.should_redraw = true;
            }

            // Render on dirty state or cadence tick
            if self.should_redraw || now.duration_since(self.last_render) >= self.tick_rate {
                if let Some(tui) = self.tui.as_mut() {
                    tui.draw(&self.app_state, &self.theme)
                        .map_err(|e| anyhow::anyhow!("Failed to render frame: {}", e))?;
                }
                self.should_redraw = false;
                self.last_render = now;
            }

            // Prevent busy loop
            tokio::time::sleep(Duration::from_millis(16)).await;
        }

        if let Some(tui) = self.tui.as_mut() {
            tui.restore()
                .map_err(|e| anyhow::anyhow!("Failed to restore terminal state: {}", e))?;
        }

        Ok(())
    }

    /// Poll for keyboard/terminal events
    fn poll_terminal_events(&mut self) -> Result<()> {
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(key_event) => self.handle_key(key_event),
                Event::Mouse(mouse_event) => {
                    if handle_mouse_event(&mut self.app_state, mouse_event) {
                        self.should_redraw = true;
                    }
                }
                Event::Resize(_, _) => {
                    self.should_redraw = true;
                }
                Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
            }
        }

        Ok(())
    }

    /// Map a key press to an action and carry it out
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        let action = handle_key_event(&mut self.app_state, key_event);
        self.handle_action(action);
        self.should_redraw = true;
    }

    /// Carry out a UI action produced by input handling
    pub fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::None => {}
            UiAction::RefreshRequested => self.start_refresh("user"),
            UiAction::MoversFilterChanged(filter) => {
                info!(
                    "Movers filter changed to {} / {}",
                    filter.universe, filter.period
                );
                self.worker.spawn_movers_update(filter);
            }
            UiAction::QuitRequested => {
                info!("User requested quit");
                self.app_state.should_quit = true;
            }
        }
    }

    /// Drain every queued event without blocking
    pub fn process_events(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }

        if processed > 0 {
            self.should_redraw = true;
        }
        processed
    }

    /// Wait for the next queued event and apply it
    pub async fn process_next_event(&mut self) -> bool {
        match self.event_rx.recv().await {
            Some(event) => {
                self.handle_event(event);
                self.should_redraw = true;
                true
            }
            None => false,
        }
    }

    /// Apply one queued event to the view state
    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::RefreshRequested { trigger } => self.start_refresh(trigger.label()),
            UiEvent::SectionUpdated(content) => {
                let kind = content.kind();
                if self.app_state.apply(content) {
                    debug!("Section {:?} updated", kind);
                } else {
                    debug!("Discarding movers result for a previous selection");
                }
            }
            UiEvent::RefreshFinished { at } => {
                self.app_state.finish_refresh(at);
                info!("Dashboard refreshed at {}", at.format("%H:%M:%S"));
            }
            UiEvent::RefreshFailed { message } => {
                warn!("Refresh failed: {}", message);
                self.app_state.fail_refresh(&message);
            }
            UiEvent::ShutdownRequested => {
                info!("UI received shutdown request");
                self.app_state.should_quit = true;
            }
        }
    }

    fn start_refresh(&mut self, trigger: &str) {
        if self.app_state.begin_refresh() {
            info!("Refresh started ({})", trigger);
            self.last_animation = Instant::now();
            self.worker.spawn_full_refresh(self.app_state.movers_filter);
        } else {
            debug!(
                "Refresh already in progress, ignoring {} request ({} coalesced)",
                trigger, self.app_state.coalesced_requests
            );
        }
    }
}
