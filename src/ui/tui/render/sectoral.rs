use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::layout::{placeholder, section_block};
use crate::market_data::SectorDelta;
use crate::sections::{SectionKind, SectionView};
use crate::ui::AppState;
use crate::ui::theme::{Theme, change_arrow};

/// Cells per percentage point before scaling
const CELLS_PER_PCT: f64 = 3.0;
/// Half-width of the diverging bar before scaling
const HALF_WIDTH: u16 = 15;

pub(super) fn render_sectoral(frame: &mut Frame<'_>, area: Rect, app: &AppState, theme: &Theme) {
    let block = section_block(SectionKind::Sectoral, theme);

    let sectors = match &app.sectoral {
        SectionView::Ready(sectors) => sectors,
        SectionView::Loading => {
            frame.render_widget(placeholder(block, "Loading...", theme, false), area);
            return;
        }
        SectionView::Failed(message) => {
            frame.render_widget(placeholder(block, message, theme, true), area);
            return;
        }
    };

    let half = usize::from(theme.scaled(HALF_WIDTH));
    let lines: Vec<Line> = sectors
        .iter()
        .map(|sector| sector_line(sector, half, theme))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Bar length in cells for a percentage change, capped at `half`
pub(crate) fn bar_cells(change_pct: f64, scaling: f64, half: usize) -> usize {
    let cells = (change_pct.abs() * CELLS_PER_PCT * scaling).round();
    if cells.is_finite() {
        (cells as usize).min(half)
    } else {
        0
    }
}

fn sector_line(sector: &SectorDelta, half: usize, theme: &Theme) -> Line<'static> {
    let cells = bar_cells(sector.change_pct, theme.scaling, half);
    let bar = "█".repeat(cells);
    let style = theme.change(sector.change_pct);

    let (left, right) = if sector.change_pct >= 0.0 {
        (" ".repeat(half), format!("{:<half$}", bar, half = half))
    } else {
        (format!("{:>half$}", bar, half = half), " ".repeat(half))
    };

    Line::from(vec![
        Span::styled(
            format!(" {:<10}", sector.sector),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(left, style),
        Span::styled("│", theme.muted()),
        Span::styled(right, style),
        Span::styled(
            format!(
                " {} {:>6.2}%",
                change_arrow(sector.change_pct),
                sector.change_pct.abs()
            ),
            style.add_modifier(Modifier::BOLD),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_cells_scale_and_cap() {
        assert_eq!(bar_cells(1.0, 1.0, 15), 3);
        assert_eq!(bar_cells(-2.0, 1.5, 15), 9);
        assert_eq!(bar_cells(50.0, 1.0, 15), 15);
        assert_eq!(bar_cells(f64::NAN, 1.0, 15), 0);
    }
}
