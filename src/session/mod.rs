//! Session orchestration module
//!
//! Owns the lifecycle around the UI loop: the event queue feeding it, the
//! refresh worker and the auto-refresh timer.

pub mod action_channel;
pub mod refresh;
pub mod session_manager;

pub use action_channel::{ActionChannel, RefreshTrigger, UiEvent};
pub use refresh::{RefreshWorker, spawn_auto_refresh};
pub use session_manager::{SessionManager, SessionState};
