use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::sections::SectionKind;
use crate::ui::theme::Theme;

/// Bordered panel titled after the section
pub(super) fn section_block(kind: SectionKind, theme: &Theme) -> Block<'static> {
    Block::default()
        .title(Span::styled(format!(" {} ", kind.title()), theme.title()))
        .borders(Borders::ALL)
        .border_style(theme.border())
}

/// Centered one-line message used for loading and error states
pub(super) fn placeholder<'a>(block: Block<'a>, text: &str, theme: &Theme, is_error: bool) -> Paragraph<'a> {
    let (text, style) = if is_error {
        (format!("❌ {}", text), theme.negative())
    } else {
        (format!("⏳ {}", text), theme.muted())
    };

    Paragraph::new(Span::styled(text, style))
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

/// Rectangle of the given percentage size centered in `area`
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
