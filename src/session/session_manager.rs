//! Session Manager for the dashboard lifecycle
//!
//! Wires the provider, the data fetcher, the refresh timer and the UI loop
//! together, and runs the one-shot commands that share the same wiring.

use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::market_data::{DataFetcher, MarketIndex};
use crate::provider::{HistoryRange, QuoteSource, YahooChartClient};
use crate::sections::{MoversFilter, dashboard_sections};
use crate::ui::ui_manager::UIManager;

use super::action_channel::ActionChannel;
use super::refresh::spawn_auto_refresh;

/// Session state tracking
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Starting,
    Running,
    ShuttingDown,
    Terminated,
}

/// Main session manager
pub struct SessionManager {
    /// CLI arguments
    cli: Cli,
    /// Application configuration
    app_config: Config,
    /// Session state
    state: SessionState,
    /// Raw provider, used directly by the connectivity check
    source: Arc<dyn QuoteSource>,
    /// Fetcher shared with the refresh worker
    fetcher: DataFetcher,
    /// Queue into the UI loop
    action_channel: ActionChannel,
    /// Shutdown signal for background tasks
    shutdown_tx: watch::Sender<bool>,
    /// Auto-refresh timer task
    timer_task: Option<JoinHandle<()>>,
}

impl SessionManager {
    /// Create a session backed by the configured HTTP provider
    pub fn new(cli: &Cli, app_config: Config) -> Self {
        let client = YahooChartClient::from_config(&app_config.provider);
        Self::with_source(cli, app_config, Arc::new(client))
    }

    /// Create a session over any quote source
    pub fn with_source(cli: &Cli, app_config: Config, source: Arc<dyn QuoteSource>) -> Self {
        info!("Creating new SessionManager");

        let (shutdown_tx, _) = watch::channel(false);
        let fetcher = DataFetcher::with_market_config(source.clone(), &app_config.market);

        Self {
            cli: cli.clone(),
            app_config,
            state: SessionState::Starting,
            source,
            fetcher,
            action_channel: ActionChannel::new(),
            shutdown_tx,
            timer_task: None,
        }
    }

    /// Start the session using the appropriate execution mode
    pub async fn start(&mut self) -> Result<()> {
        if self.cli.is_dry_run_mode() {
            return self.run_dry_run_mode();
        }

        self.state = SessionState::Running;
        let result = match self.cli.command() {
            Commands::Dashboard => self.run_dashboard().await,
            Commands::Snapshot { universe, period } => {
                self.run_snapshot(universe.as_deref(), period.as_deref())
                    .await
            }
            Commands::Check => self.run_check().await,
            Commands::Config { action } => {
                Config::handle_command(&action, &self.cli.config_file)
            }
        };

        self.shutdown().await;
        result
    }

    fn run_dry_run_mode(&mut self) -> Result<()> {
        info!("Running in dry-run mode - showing welcome page and configuration");

        crate::ui::display_welcome_page();
        crate::ui::cli::print_dry_run_summary(&self.cli, &self.app_config)?;

        self.state = SessionState::Terminated;
        info!("Dry-run mode completed");
        Ok(())
    }

    /// Run the interactive dashboard until the user quits
    async fn run_dashboard(&mut self) -> Result<()> {
        info!("Starting dashboard session");

        let refresh = &self.app_config.refresh;
        self.timer_task = Some(spawn_auto_refresh(
            self.action_channel.event_tx(),
            Duration::from_secs(refresh.interval_secs),
            Duration::from_millis(refresh.initial_delay_ms),
            self.shutdown_tx.subscribe(),
        ));

        let mut ui_manager =
            UIManager::new(self.fetcher.clone(), &mut self.action_channel, &self.app_config)?;
        ui_manager.run().await
    }

    /// Fetch every section once and print the results
    pub async fn run_snapshot(&self, universe: Option<&str>, period: Option<&str>) -> Result<()> {
        let filter =
            MoversFilter::from_config(&self.app_config.market).with_selection(universe, period);

        info!(
            "Taking snapshot for {} over {}",
            filter.universe, filter.period
        );

        let mut contents = Vec::new();
        for section in dashboard_sections(filter) {
            contents.push(section.update(&self.fetcher).await);
        }

        crate::ui::cli::print_snapshot(&contents, self.app_config.ui.enable_colors);
        Ok(())
    }

    /// Fetch NIFTY50 history and report whether the provider answered
    pub async fn run_check(&self) -> Result<()> {
        let index = MarketIndex::Nifty50;
        info!("Checking provider at {}", self.app_config.provider.base_url);

        match self.source.history(index.symbol(), HistoryRange::FiveDays).await {
            Ok(history) => {
                crate::ui::cli::print_check_result(
                    &self.app_config.provider.base_url,
                    index,
                    Ok(history.len()),
                );
                Ok(())
            }
            Err(e) => {
                error!("Provider check failed: {}", e);
                crate::ui::cli::print_check_result(
                    &self.app_config.provider.base_url,
                    index,
                    Err(&e),
                );
                Err(e).context("Market data provider is unreachable")
            }
        }
    }

    /// Stop background tasks
    pub async fn shutdown(&mut self) {
        if self.state == SessionState::Terminated {
            return;
        }

        info!("Initiating graceful shutdown");
        self.state = SessionState::ShuttingDown;

        let _ = self.shutdown_tx.send(true);
        if let Some(timer_task) = self.timer_task.take() {
            if let Err(e) = timer_task.await {
                warn!("Auto-refresh timer terminated with error: {}", e);
            }
        }

        self.state = SessionState::Terminated;
        info!("Shutdown completed");
    }

    /// Get session state
    pub fn get_state(&self) -> &SessionState {
        &self.state
    }
}

impl Drop for SessionManager {
    fn drop(&mut self) {
        if self.state != SessionState::Terminated {
            warn!("SessionManager dropped without proper shutdown");
        }
    }
}
