use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::layout::centered_rect;
use crate::ui::AppState;
use crate::ui::theme::Theme;

/// Modal "loading" box drawn over the dashboard while a refresh runs
pub(super) fn render_loading_overlay(frame: &mut Frame<'_>, area: Rect, app: &AppState, theme: &Theme) {
    let popup = centered_rect(50, 30, area);
    if popup.height < 3 {
        return;
    }

    let lines = vec![
        Line::from(Span::raw("⏳")),
        Line::from(Span::styled(app.loading_text(), theme.title())),
        Line::from(Span::styled(
            "Please wait while we fetch the latest updates",
            theme.muted(),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .style(theme.panel());

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        popup,
    );
}
