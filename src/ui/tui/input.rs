use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

use super::UiAction;
use crate::ui::AppState;

/// Handle keyboard events for TUI, returning actions for the UI manager
pub fn handle_key_event(app: &mut AppState, key_event: KeyEvent) -> UiAction {
    if key_event.kind == KeyEventKind::Release {
        return UiAction::None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            KeyCode::Char('c') | KeyCode::Char('d') => {
                app.should_quit = true;
                UiAction::QuitRequested
            }
            _ => UiAction::None,
        };
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            UiAction::QuitRequested
        }
        KeyCode::Char('r') | KeyCode::F(5) => UiAction::RefreshRequested,
        KeyCode::Char('i') => UiAction::MoversFilterChanged(app.cycle_universe()),
        KeyCode::Char('t') => UiAction::MoversFilterChanged(app.cycle_period()),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => {
            app.scroll_up();
            UiAction::None
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => {
            app.scroll_down();
            UiAction::None
        }
        KeyCode::Home => {
            app.scroll = 0;
            UiAction::None
        }
        _ => UiAction::None,
    }
}

/// Mouse wheel scrolls the section list
pub fn handle_mouse_event(app: &mut AppState, mouse_event: MouseEvent) -> bool {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => {
            app.scroll_up();
            true
        }
        MouseEventKind::ScrollDown => {
            app.scroll_down();
            true
        }
        _ => false,
    }
}
