//! UI event queue
//!
//! Every task that wants to touch view state posts a [`UiEvent`] here; only the
//! UI loop drains it.

use anyhow::Result;
use chrono::{DateTime, Local};
use tokio::sync::mpsc;

use crate::sections::SectionContent;

/// What caused a refresh request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
    Startup,
    Timer,
    User,
}

impl RefreshTrigger {
    pub fn label(&self) -> &'static str {
        match self {
            RefreshTrigger::Startup => "startup",
            RefreshTrigger::Timer => "timer",
            RefreshTrigger::User => "user",
        }
    }
}

/// Events delivered to the UI loop
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Ask for a full dashboard refresh
    RefreshRequested { trigger: RefreshTrigger },
    /// One section finished fetching; carries its full replacement content
    SectionUpdated(SectionContent),
    /// The refresh worker went through every section
    RefreshFinished { at: DateTime<Local> },
    /// The refresh worker stopped early
    RefreshFailed { message: String },
    /// Shutdown request
    ShutdownRequested,
}

/// Queue feeding the UI loop
pub struct ActionChannel {
    /// Event sender
    event_tx: mpsc::UnboundedSender<UiEvent>,
    /// Event receiver, handed to the UI loop once
    event_rx: Option<mpsc::UnboundedReceiver<UiEvent>>,
}

impl Clone for ActionChannel {
    fn clone(&self) -> Self {
        Self {
            event_tx: self.event_tx.clone(),
            event_rx: None, // Receivers cannot be cloned
        }
    }
}

impl ActionChannel {
    /// Create a new ActionChannel
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            event_tx,
            event_rx: Some(event_rx),
        }
    }

    /// Send event to channel
    pub fn send_event(&self, event: UiEvent) -> Result<()> {
        self.event_tx
            .send(event)
            .map_err(|e| anyhow::anyhow!("Failed to send event: {}", e))
    }

    /// Get event sender for external use
    pub fn event_tx(&self) -> mpsc::UnboundedSender<UiEvent> {
        self.event_tx.clone()
    }

    /// Take the receiver; returns `None` after the first call
    pub fn event_rx(&mut self) -> Option<mpsc::UnboundedReceiver<UiEvent>> {
        self.event_rx.take()
    }

    pub fn request_refresh(&self, trigger: RefreshTrigger) -> Result<()> {
        self.send_event(UiEvent::RefreshRequested { trigger })
    }

    /// Send shutdown request
    pub fn request_shutdown(&self) -> Result<()> {
        self.send_event(UiEvent::ShutdownRequested)
    }

    /// Check if channel is closed
    pub fn is_closed(&self) -> bool {
        self.event_tx.is_closed()
    }
}

impl Default for ActionChannel {
    fn default() -> Self {
        Self::new()
    }
}
