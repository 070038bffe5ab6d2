//! Terminal User Interface implementation
//!
//! Provides the dashboard screen using ratatui.

mod input;
mod render;

use std::io::{Stdout, stdout};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};

use super::AppState;
use super::theme::Theme;
use crate::AppResult;
use crate::sections::MoversFilter;

pub use input::{handle_key_event, handle_mouse_event};

/// Actions generated from key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    None,
    RefreshRequested,
    /// Re-fetch the movers panel for the given selection
    MoversFilterChanged(MoversFilter),
    QuitRequested,
}

/// RAII helper controlling the terminal lifecycle
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    /// Create a new TUI terminal instance
    pub fn new() -> AppResult<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal })
    }

    /// Render the application
    pub fn draw(&mut self, app: &AppState, theme: &Theme) -> AppResult<()> {
        self.terminal.draw(|frame| render_dashboard(frame, app, theme))?;
        Ok(())
    }

    /// Restore terminal to canonical mode
    pub fn restore(&mut self) -> AppResult<()> {
        disable_raw_mode()?;
        let mut stdout = stdout();
        execute!(
            stdout,
            cursor::Show,
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        // Attempt to restore the terminal; ignore errors because we are in Drop
        let _ = disable_raw_mode();
        let mut stdout = stdout();
        let _ = execute!(
            stdout,
            cursor::Show,
            LeaveAlternateScreen,
            DisableMouseCapture
        );
    }
}

/// Draw the whole dashboard into a frame; usable with any backend
pub fn render_dashboard(frame: &mut Frame<'_>, app: &AppState, theme: &Theme) {
    render::render_root(frame, app, theme);
}
