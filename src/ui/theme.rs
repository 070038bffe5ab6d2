//! Classic beige-and-blue palette plus display scaling

use ratatui::style::{Color, Modifier, Style};

use crate::config::{UiConfig, clamp_scaling};
use crate::market_data::SentimentBand;

const BEIGE: Color = Color::Rgb(0xEC, 0xE9, 0xD8);
const XP_BLUE: Color = Color::Rgb(0x00, 0x54, 0xE3);
const BORDER_BLUE: Color = Color::Rgb(0x7A, 0x96, 0xDF);
const BUTTON_GRAY: Color = Color::Rgb(0xD4, 0xD0, 0xC8);
const GAIN_GREEN: Color = Color::Rgb(0x00, 0xAA, 0x00);
const LOSS_RED: Color = Color::Rgb(0xCC, 0x00, 0x00);
const MUTED_GRAY: Color = Color::Rgb(0x66, 0x66, 0x66);

/// Styles used by every panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub enable_colors: bool,
    pub scaling: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            enable_colors: true,
            scaling: 1.0,
        }
    }
}

impl Theme {
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            enable_colors: config.enable_colors,
            scaling: clamp_scaling(config.scaling),
        }
    }

    fn color(&self, color: Color) -> Style {
        if self.enable_colors {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    pub fn header(&self) -> Style {
        if self.enable_colors {
            Style::default()
                .fg(Color::White)
                .bg(XP_BLUE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    pub fn border(&self) -> Style {
        self.color(BORDER_BLUE)
    }

    pub fn title(&self) -> Style {
        self.color(XP_BLUE).add_modifier(Modifier::BOLD)
    }

    pub fn panel(&self) -> Style {
        if self.enable_colors {
            Style::default().fg(Color::Black).bg(BEIGE)
        } else {
            Style::default()
        }
    }

    pub fn button(&self) -> Style {
        if self.enable_colors {
            Style::default().fg(Color::Black).bg(BUTTON_GRAY)
        } else {
            Style::default().add_modifier(Modifier::REVERSED)
        }
    }

    pub fn muted(&self) -> Style {
        if self.enable_colors {
            Style::default().fg(MUTED_GRAY)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }

    pub fn positive(&self) -> Style {
        self.color(GAIN_GREEN)
    }

    pub fn negative(&self) -> Style {
        self.color(LOSS_RED)
    }

    /// Green for gains, red for losses
    pub fn change(&self, value: f64) -> Style {
        if value >= 0.0 {
            self.positive()
        } else {
            self.negative()
        }
    }

    /// Meter color per sentiment band
    pub fn band(&self, band: SentimentBand) -> Style {
        let color = match band {
            SentimentBand::ExtremeFear => LOSS_RED,
            SentimentBand::Fear => Color::Rgb(0xFF, 0x66, 0x00),
            SentimentBand::Neutral => Color::Rgb(0xFF, 0xD7, 0x00),
            SentimentBand::Greed => Color::Rgb(0x90, 0xEE, 0x90),
            SentimentBand::ExtremeGreed => GAIN_GREEN,
        };
        self.color(color).add_modifier(Modifier::BOLD)
    }

    /// Scale a base cell count, never below one
    pub fn scaled(&self, base: u16) -> u16 {
        ((f64::from(base) * self.scaling).round() as u16).max(1)
    }
}

/// Arrow prefix used next to a change value
pub fn change_arrow(value: f64) -> &'static str {
    if value >= 0.0 { "▲" } else { "▼" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_cells() {
        let theme = Theme {
            enable_colors: true,
            scaling: 1.5,
        };
        assert_eq!(theme.scaled(10), 15);
        assert_eq!(Theme::default().scaled(0), 1);
    }

    #[test]
    fn test_from_config_clamps_scaling() {
        let config = UiConfig {
            scaling: 9.0,
            ..UiConfig::default()
        };
        assert_eq!(Theme::from_config(&config).scaling, 3.0);
    }

    #[test]
    fn test_colors_can_be_disabled() {
        let theme = Theme {
            enable_colors: false,
            scaling: 1.0,
        };
        assert_eq!(theme.positive(), Style::default());
        assert_eq!(theme.change(-1.0), Style::default());
        assert_ne!(Theme::default().change(-1.0), Theme::default().change(1.0));
    }
}
