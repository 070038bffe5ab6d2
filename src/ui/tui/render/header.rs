use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::market_data::MarketStatus;
use crate::sections::SectionView;
use crate::ui::AppState;
use crate::ui::theme::{Theme, change_arrow};

pub(super) fn render_header(frame: &mut Frame<'_>, area: Rect, app: &AppState, theme: &Theme) {
    let title = Span::styled(" 🏛️ Bazaar - Indian Stock Market Dashboard ", theme.header());

    let refresh_hint = if app.is_refreshing() {
        Span::styled(" 🔄 Refresh Now [r] ", theme.muted())
    } else {
        Span::styled(" 🔄 Refresh Now [r] ", theme.button())
    };

    let top = Line::from(vec![
        title,
        Span::raw("  "),
        Span::styled(app.status.clone(), theme.muted()),
        Span::raw("  "),
        refresh_hint,
    ]);

    let mut summary = vec![Span::styled(
        "Market Status:",
        theme.title().add_modifier(Modifier::BOLD),
    )];
    match &app.ticker {
        SectionView::Ready(market) => {
            let status_style = match market.status {
                MarketStatus::Open => theme.positive(),
                MarketStatus::Closed => theme.negative(),
            };
            summary.push(Span::styled(
                format!(" {}", market.status.label()),
                status_style.add_modifier(Modifier::BOLD),
            ));
            for quote in &market.quotes {
                summary.push(Span::raw("  |  "));
                summary.push(Span::styled(
                    format!(
                        "{} {} {:.2}%",
                        quote.name,
                        change_arrow(quote.change_pct),
                        quote.change_pct.abs()
                    ),
                    theme.change(quote.change_pct),
                ));
            }
        }
        _ => summary.push(Span::styled(" --", theme.muted())),
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border());

    let paragraph = Paragraph::new(vec![top, Line::from(summary)]).block(block);
    frame.render_widget(paragraph, area);
}
