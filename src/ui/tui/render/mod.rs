mod footer;
mod header;
mod layout;
mod movers;
mod overlay;
mod sectoral;
mod sentiment;
mod ticker;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::market_data::SECTORS;
use crate::sections::SectionKind;
use crate::ui::AppState;
use crate::ui::theme::Theme;

use self::footer::render_footer;
use self::header::render_header;
use self::movers::render_movers;
use self::overlay::render_loading_overlay;
use self::sectoral::render_sectoral;
use self::sentiment::render_sentiment;
use self::ticker::render_ticker;

pub(super) fn render_root(frame: &mut Frame<'_>, app: &AppState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    render_header(frame, chunks[0], app, theme);
    render_body(frame, chunks[1], app, theme);
    render_footer(frame, chunks[2], app, theme);

    if app.is_refreshing() {
        render_loading_overlay(frame, frame.size(), app, theme);
    }
}

fn render_body(frame: &mut Frame<'_>, area: Rect, app: &AppState, theme: &Theme) {
    let sections = app.visible_sections();

    let mut constraints: Vec<Constraint> = sections
        .iter()
        .map(|kind| Constraint::Length(section_height(*kind, app)))
        .collect();
    constraints.push(Constraint::Min(0));

    let areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (kind, section_area) in sections.iter().zip(areas.iter()) {
        if section_area.height == 0 {
            break;
        }
        match kind {
            SectionKind::Ticker => render_ticker(frame, *section_area, app, theme),
            SectionKind::GainersLosers => render_movers(frame, *section_area, app, theme),
            SectionKind::Sentiment => render_sentiment(frame, *section_area, app, theme),
            SectionKind::Sectoral => render_sectoral(frame, *section_area, app, theme),
        }
    }
}

/// Rows a panel needs including its border
fn section_height(kind: SectionKind, app: &AppState) -> u16 {
    match kind {
        SectionKind::Ticker => 7,
        // selector line, list header, one row per entry
        SectionKind::GainersLosers => u16::try_from(app.movers_filter.limit)
            .unwrap_or(u16::MAX)
            .saturating_add(5),
        SectionKind::Sentiment => 8,
        SectionKind::Sectoral => SECTORS.len() as u16 + 2,
    }
}
