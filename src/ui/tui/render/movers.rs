use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};

use super::layout::{placeholder, section_block};
use crate::market_data::StockDelta;
use crate::sections::{SectionKind, SectionView};
use crate::ui::AppState;
use crate::ui::theme::{Theme, change_arrow};

pub(super) fn render_movers(frame: &mut Frame<'_>, area: Rect, app: &AppState, theme: &Theme) {
    let block = section_block(SectionKind::GainersLosers, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let filter = app.movers_filter;
    let mut selector = vec![
        Span::styled("Select Index: ", theme.muted()),
        Span::styled(
            format!("[{}]", filter.universe),
            theme.button().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" (i)   Time: ", theme.muted()),
        Span::styled(
            format!("[{}]", filter.period),
            theme.button().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" (t)", theme.muted()),
    ];
    if app.movers_loading {
        selector.push(Span::styled("   ⏳ Loading stocks...", theme.muted()));
    }
    frame.render_widget(Paragraph::new(Line::from(selector)), chunks[0]);

    let movers = match &app.movers {
        SectionView::Ready(movers) => movers,
        SectionView::Loading => {
            let text = if app.movers_loading { "Loading stocks..." } else { "Loading..." };
            frame.render_widget(
                placeholder(Default::default(), text, theme, false),
                chunks[1],
            );
            return;
        }
        SectionView::Failed(message) => {
            frame.render_widget(placeholder(Default::default(), message, theme, true), chunks[1]);
            return;
        }
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    frame.render_widget(
        movers_table("🟢 Top Gainers", &movers.gainers, theme),
        columns[0],
    );
    frame.render_widget(
        movers_table("🔴 Top Losers", &movers.losers, theme),
        columns[1],
    );
}

fn movers_table<'a>(title: &'a str, stocks: &[StockDelta], theme: &Theme) -> Table<'a> {
    let widths = [
        Constraint::Min(12),
        Constraint::Length(12),
        Constraint::Length(10),
    ];

    let header = Row::new([
        Cell::from(title),
        Cell::from("Price"),
        Cell::from("Change"),
    ])
    .style(theme.title().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = stocks
        .iter()
        .map(|stock| {
            Row::new(vec![
                Cell::from(stock.symbol.clone()),
                Cell::from(format!("₹{:.2}", stock.price)),
                Cell::from(format!(
                    "{} {:.2}%",
                    change_arrow(stock.change_pct),
                    stock.change_pct.abs()
                ))
                .style(theme.change(stock.change_pct)),
            ])
        })
        .collect();

    Table::new(rows, widths).header(header).column_spacing(1)
}
