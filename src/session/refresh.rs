//! Refresh worker and auto-refresh timer

use chrono::Local;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::market_data::DataFetcher;
use crate::sections::{GainersLosersSection, MoversFilter, Section, dashboard_sections};

use super::action_channel::{RefreshTrigger, UiEvent};

/// Runs section updates off the UI loop and posts results back to it
#[derive(Clone)]
pub struct RefreshWorker {
    fetcher: DataFetcher,
    event_tx: mpsc::UnboundedSender<UiEvent>,
    pacing: Duration,
}

impl RefreshWorker {
    pub fn new(
        fetcher: DataFetcher,
        event_tx: mpsc::UnboundedSender<UiEvent>,
        pacing: Duration,
    ) -> Self {
        Self {
            fetcher,
            event_tx,
            pacing,
        }
    }

    /// Update every section in order on a background task.
    ///
    /// Always ends with `RefreshFinished` or `RefreshFailed` unless the UI
    /// loop is already gone.
    pub fn spawn_full_refresh(&self, filter: MoversFilter) -> JoinHandle<()> {
        let worker = self.clone();
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            let sections = dashboard_sections(filter);
            let inner = tokio::spawn(async move { worker.run_sections(sections).await });

            if let Err(e) = inner.await {
                error!("Refresh worker aborted: {}", e);
                let _ = event_tx.send(UiEvent::RefreshFailed {
                    message: e.to_string(),
                });
            }
        })
    }

    /// Re-fetch only the movers panel for a new filter
    pub fn spawn_movers_update(&self, filter: MoversFilter) -> JoinHandle<()> {
        let fetcher = self.fetcher.clone();
        let event_tx = self.event_tx.clone();

        tokio::spawn(async move {
            let section = GainersLosersSection::new(filter);
            let content = section.update(&fetcher).await;
            if event_tx.send(UiEvent::SectionUpdated(content)).is_err() {
                debug!("UI queue closed, dropping movers update");
            }
        })
    }

    /// Update `sections` sequentially, pacing deliveries to the UI queue
    pub async fn run_sections(&self, sections: Vec<Box<dyn Section>>) {
        let started = Instant::now();

        for section in sections {
            let kind = section.kind();
            let content = section.update(&self.fetcher).await;

            if content.is_failed() {
                debug!("Section {:?} has no data this cycle", kind);
            }

            if self.event_tx.send(UiEvent::SectionUpdated(content)).is_err() {
                debug!("UI queue closed, abandoning refresh");
                return;
            }

            tokio::time::sleep(self.pacing).await;
        }

        info!("Refresh completed in {:?}", started.elapsed());
        let _ = self.event_tx.send(UiEvent::RefreshFinished { at: Local::now() });
    }
}

/// Post a startup refresh after `initial_delay`, then one every `interval`
/// until `shutdown_rx` flips or its sender is dropped.
pub fn spawn_auto_refresh(
    event_tx: mpsc::UnboundedSender<UiEvent>,
    interval: Duration,
    initial_delay: Duration,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::select! {
            _ = tokio::time::sleep(initial_delay) => {}
            _ = shutdown_rx.changed() => {
                debug!("Shutdown before first refresh");
                return;
            }
        }

        if event_tx
            .send(UiEvent::RefreshRequested {
                trigger: RefreshTrigger::Startup,
            })
            .is_err()
        {
            return;
        }

        let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    debug!("Auto-refresh tick");
                    if event_tx
                        .send(UiEvent::RefreshRequested {
                            trigger: RefreshTrigger::Timer,
                        })
                        .is_err()
                    {
                        break;
                    }
                }
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Auto-refresh timer stopped");
    })
}
