use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use super::layout::{placeholder, section_block};
use crate::sections::{SectionKind, SectionView, SentimentData, VIX_UNAVAILABLE};
use crate::ui::AppState;
use crate::ui::theme::{Theme, change_arrow};

const LEGEND: &str = "0=Extreme Fear  25=Fear  50=Neutral  75=Greed  100=Extreme Greed";

pub(super) fn render_sentiment(frame: &mut Frame<'_>, area: Rect, app: &AppState, theme: &Theme) {
    let block = section_block(SectionKind::Sentiment, theme);

    let data = match &app.sentiment {
        SectionView::Ready(data) => data,
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

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    render_vix_card(frame, columns[0], data, theme);
    render_greed_meter(frame, columns[1], data, theme);
}

fn render_vix_card(frame: &mut Frame<'_>, area: Rect, data: &SentimentData, theme: &Theme) {
    let mut lines = vec![Line::from(Span::styled(
        "India VIX (Volatility Index)",
        theme.title().add_modifier(Modifier::BOLD),
    ))];

    match &data.vix {
        Some(vix) => {
            lines.push(Line::from(Span::raw(format!("{:.2}", vix.price))));
            lines.push(Line::from(Span::styled(
                format!(
                    "{} {:.2} ({:.2}%)",
                    change_arrow(vix.change),
                    vix.change.abs(),
                    vix.change_pct.abs()
                ),
                // rising volatility is bad news
                theme.change(-vix.change),
            )));
        }
        None => lines.push(Line::from(Span::styled(VIX_UNAVAILABLE, theme.muted()))),
    }

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::RIGHT).border_style(theme.border()));
    frame.render_widget(card, area);
}

fn render_greed_meter(frame: &mut Frame<'_>, area: Rect, data: &SentimentData, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let score = &data.score;
    let band_style = theme.band(score.band);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Market Greed Meter",
            theme.title().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows[0],
    );

    let gauge = Gauge::default()
        .gauge_style(band_style)
        .percent(score.score.clamp(0.0, 100.0).round() as u16)
        .label(Span::styled(
            format!("{:.1} / 100  {}", score.score, score.band),
            band_style,
        ));
    frame.render_widget(gauge, rows[1]);

    frame.render_widget(
        Paragraph::new(Span::styled(LEGEND, theme.muted())).alignment(Alignment::Center),
        rows[2],
    );
}
