use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::layout::{placeholder, section_block};
use crate::market_data::IndexQuote;
use crate::sections::{SectionKind, SectionView};
use crate::ui::AppState;
use crate::ui::theme::{Theme, change_arrow};

pub(super) fn render_ticker(frame: &mut Frame<'_>, area: Rect, app: &AppState, theme: &Theme) {
    let block = section_block(SectionKind::Ticker, theme);

    let summary = match &app.ticker {
        SectionView::Ready(summary) => summary,
        SectionView::Loading => {
            frame.render_widget(placeholder(block, "Loading...", theme, false), area);
            return;
        }
        SectionView::Failed(message) => {
            frame.render_widget(placeholder(block, message, theme, true), area);
            return;
        }
    };

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let count = summary.quotes.len() as u32;
    if count == 0 {
        return;
    }
    let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (quote, card) in summary.quotes.iter().zip(cards.iter()) {
        frame.render_widget(ticker_card(quote, theme), *card);
    }
}

fn ticker_card<'a>(quote: &IndexQuote, theme: &Theme) -> Paragraph<'a> {
    let change_style = theme.change(quote.change);

    let lines = vec![
        Line::from(Span::styled(
            quote.name.clone(),
            theme.title().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(format!("{:.2}", quote.price))),
        Line::from(Span::styled(
            format!(
                "{} {:.2} ({:.2}%)",
                change_arrow(quote.change),
                quote.change.abs(),
                quote.change_pct.abs()
            ),
            change_style,
        )),
        Line::from(Span::styled(
            format!(
                "O {:.2} | H {:.2} | L {:.2}",
                quote.open, quote.high, quote.low
            ),
            theme.muted(),
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::RIGHT).border_style(theme.border()))
}
