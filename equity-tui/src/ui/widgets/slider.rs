//! Labeled horizontal slider widget.
//!
//! Used by the Journey view for the initial equity percentage.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme;

pub struct Slider<'a> {
    label: &'a str,
    value: f64,
    min: f64,
    max: f64,
    value_text: String,
}

impl<'a> Slider<'a> {
    pub fn new(label: &'a str, value: f64, min: f64, max: f64) -> Self {
        Self {
            label,
            value,
            min,
            max,
            value_text: format!("{value:.2}"),
        }
    }

    /// Replace the default two-decimal readout.
    pub fn value_text(mut self, text: impl Into<String>) -> Self {
        self.value_text = text.into();
        self
    }

    /// Render as a single line `label [=====     ] readout`.
    pub fn line(&self, width: usize, focused: bool) -> Line<'a> {
        let style = if focused { theme::accent() } else { theme::muted() };
        Line::from(vec![
            Span::styled(format!("{}: ", self.label), style),
            Span::styled(track(self.value, self.min, self.max, width), style),
            Span::styled(format!(" {}", self.value_text), theme::text()),
        ])
    }

    /// Range end labels, padded to line up under the track.
    pub fn range_line(&self, min_text: &str, max_text: &str, width: usize) -> Line<'a> {
        let indent = self.label.chars().count() + 2;
        let gap = (width + 2).saturating_sub(min_text.len() + max_text.len());
        Line::from(Span::styled(
            format!("{}{}{}{}", " ".repeat(indent), min_text, " ".repeat(gap), max_text),
            Style::default().fg(theme::MUTED),
        ))
    }
}

/// `[====      ]` with `width` cells between the brackets.
pub fn track(value: f64, min: f64, max: f64, width: usize) -> String {
    let range = max - min;
    if range <= 0.0 {
        return format!("[{}]", "=".repeat(width));
    }
    // NaN reads as an empty track.
    let frac = if value.is_nan() {
        0.0
    } else {
        ((value - min) / range).clamp(0.0, 1.0)
    };
    let filled = (frac * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "=".repeat(filled), " ".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_fills_proportionally() {
        assert_eq!(track(0.0, 0.0, 1.0, 10), "[          ]");
        assert_eq!(track(0.3, 0.0, 1.0, 10), "[===       ]");
        assert_eq!(track(1.0, 0.0, 1.0, 10), "[==========]");
    }

    #[test]
    fn track_clamps_and_tolerates_nan() {
        assert_eq!(track(5.0, 0.0, 1.0, 4), "[====]");
        assert_eq!(track(-1.0, 0.0, 1.0, 4), "[    ]");
        assert_eq!(track(f64::NAN, 0.0, 1.0, 4), "[    ]");
        assert_eq!(track(0.5, 1.0, 1.0, 3), "[===]");
    }

    #[test]
    fn line_has_label_and_readout() {
        let slider = Slider::new("Initial equity", 0.3, 0.0, 1.0).value_text("0.300%");
        let text: String = slider
            .line(10, true)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "Initial equity: [===       ] 0.300%");
    }
}
