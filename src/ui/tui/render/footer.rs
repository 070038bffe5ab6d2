use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::AppState;
use crate::ui::theme::Theme;

pub(super) fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &AppState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(app.last_updated_label(), theme.muted()),
        Span::styled(
            "   [i] index  [t] period  [j/k] scroll  [q] quit",
            theme.muted(),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
