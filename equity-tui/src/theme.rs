//! Violet-on-charcoal theme tokens for the Equity Playtool TUI
//!
//! # Color Palette
//! - **Accent**: Violet (focus, the equity-percentage series)
//! - **Valuation**: Electric cyan (company valuation series)
//! - **Value**: Neon green (your stake's dollar value)
//! - **Negative**: Hot pink (negative values from out-of-range dilution)
//! - **Warning**: Neon orange (NaN, warnings)
//! - **Muted**: Steel blue (secondary text, axes)

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(18, 18, 20);
pub const ACCENT: Color = Color::Rgb(170, 59, 255);
pub const VALUATION: Color = Color::Rgb(0, 255, 255);
pub const VALUE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_PRIMARY: Color = Color::White;

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn text() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

/// Cursor highlight.
pub fn selected() -> Style {
    accent().add_modifier(Modifier::REVERSED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(MUTED)
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Color for a computed figure: NaN is a warning, negatives stand out.
pub fn figure_color(value: f64) -> Color {
    if value.is_nan() {
        WARNING
    } else if value < 0.0 {
        NEGATIVE
    } else {
        TEXT_PRIMARY
    }
}

pub fn figure(value: f64) -> Style {
    Style::default().fg(figure_color(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_color_flags_degenerate_values() {
        assert_eq!(figure_color(1.5), TEXT_PRIMARY);
        assert_eq!(figure_color(0.0), TEXT_PRIMARY);
        assert_eq!(figure_color(-0.2), NEGATIVE);
        assert_eq!(figure_color(f64::NAN), WARNING);
    }

    #[test]
    fn active_panel_uses_accent() {
        assert_eq!(panel_border(true).fg, Some(ACCENT));
        assert_eq!(panel_border(false).fg, Some(MUTED));
    }
}
