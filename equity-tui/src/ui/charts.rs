//! Journey charts — equity %, valuation and stake value per stage.
//!
//! The valuation and value charts plot `log10(y)`; stages with a
//! non-positive or non-finite figure have no place on a log axis and are
//! left out of those series.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};

use equity_core::{format_percentage, log_scale_formatter, ProjectedPoint};

use crate::theme;
use crate::ui::truncate;

/// Y-axis scaling for a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Log10,
}

/// One chart's worth of configuration.
pub struct SeriesSpec<'a> {
    pub title: &'a str,
    pub color: Color,
    pub scale: Scale,
    pub pick: fn(&ProjectedPoint) -> f64,
    pub label: fn(f64) -> String,
}

pub fn equity_spec() -> SeriesSpec<'static> {
    SeriesSpec {
        title: " Your Equity % ",
        color: theme::ACCENT,
        scale: Scale::Linear,
        pick: |p| p.equity,
        label: format_percentage,
    }
}

pub fn valuation_spec() -> SeriesSpec<'static> {
    SeriesSpec {
        title: " Company Valuation (log) ",
        color: theme::VALUATION,
        scale: Scale::Log10,
        pick: |p| p.valuation,
        label: log_scale_formatter,
    }
}

pub fn value_spec() -> SeriesSpec<'static> {
    SeriesSpec {
        title: " Your Equity Value (log) ",
        color: theme::VALUE,
        scale: Scale::Log10,
        pick: |p| p.value,
        label: log_scale_formatter,
    }
}

/// Map each stage to a plot coordinate, dropping what the scale cannot show.
pub fn plot_points(points: &[ProjectedPoint], spec: &SeriesSpec) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| {
            let y = (spec.pick)(p);
            let plotted = match spec.scale {
                Scale::Linear => y,
                Scale::Log10 if y > 0.0 => y.log10(),
                Scale::Log10 => return None,
            };
            plotted.is_finite().then_some((i as f64, plotted))
        })
        .collect()
}

/// Y bounds for plotted data. Log charts snap to whole decades.
pub fn y_bounds(data: &[(f64, f64)], scale: Scale) -> [f64; 2] {
    let min = data.iter().map(|&(_, y)| y).fold(f64::INFINITY, f64::min);
    let max = data.iter().map(|&(_, y)| y).fold(f64::NEG_INFINITY, f64::max);
    match scale {
        Scale::Log10 => {
            let lo = min.floor();
            let hi = max.ceil();
            if hi > lo { [lo, hi] } else { [lo, lo + 1.0] }
        }
        Scale::Linear => {
            let range = max - min;
            let pad = if range > 0.0 { range * 0.05 } else { min.abs().max(0.01) * 0.1 };
            [min - pad, max + pad]
        }
    }
}

/// Three y-axis tick labels (low, mid, high) in display units.
pub fn y_labels(bounds: [f64; 2], spec: &SeriesSpec) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .into_iter()
        .map(|y| match spec.scale {
            Scale::Linear => (spec.label)(y),
            Scale::Log10 => (spec.label)(10f64.powf(y)),
        })
        .collect()
}

pub fn render(
    f: &mut Frame,
    area: Rect,
    points: &[ProjectedPoint],
    selected: usize,
    spec: &SeriesSpec,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(spec.color))
        .title(Span::styled(spec.title, Style::default().fg(spec.color)));

    let data = plot_points(points, spec);
    if data.is_empty() {
        let inner = block.inner(area);
        f.render_widget(block, area);
        let msg = Line::from(Span::styled("No plottable values", theme::muted()));
        f.render_widget(Paragraph::new(vec![Line::from(""), msg]), inner);
        return;
    }

    let marker: Vec<(f64, f64)> = data
        .iter()
        .copied()
        .filter(|&(x, _)| x as usize == selected)
        .collect();

    let bounds = y_bounds(&data, spec.scale);
    let x_max = points.len().saturating_sub(1).max(1) as f64;

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(spec.color))
            .graph_type(GraphType::Line)
            .data(&data),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .style(theme::warning())
            .graph_type(GraphType::Scatter)
            .data(&marker),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([0.0, x_max])
                .labels(x_labels(points)),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds(bounds)
                .labels(
                    y_labels(bounds, spec)
                        .into_iter()
                        .map(|l| Span::styled(l, theme::muted()))
                        .collect::<Vec<_>>(),
                ),
        );

    f.render_widget(chart, area);
}

/// First and last stage names; the axis has no room for more.
fn x_labels(points: &[ProjectedPoint]) -> Vec<Span<'static>> {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 => vec![
            Span::styled(truncate(&first.stage, 10), theme::muted()),
            Span::styled(truncate(&last.stage, 10), theme::muted()),
        ],
        (Some(only), _) => vec![Span::styled(truncate(&only.stage, 10), theme::muted())],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use equity_core::{FundingRound, Scenario};

    #[test]
    fn log_series_drops_non_positive() {
        let points = equity_core::project(
            0.3,
            &[
                FundingRound::new("A", 10.0, 1e6),
                FundingRound::new("B", 10.0, 0.0),
                FundingRound::new("C", 10.0, f64::NAN),
                FundingRound::new("D", 10.0, 1e9),
            ],
        );
        let data = plot_points(&points, &valuation_spec());
        assert_eq!(data, vec![(0.0, 6.0), (3.0, 9.0)]);
    }

    #[test]
    fn linear_series_keeps_negatives() {
        let points = equity_core::project(1.0, &[FundingRound::new("Flip", 150.0, 1e6)]);
        let data = plot_points(&points, &equity_spec());
        assert_eq!(data.len(), 1);
        assert!(data[0].1 < 0.0);
    }

    #[test]
    fn log_bounds_snap_to_decades() {
        let data = vec![(0.0, 7.39), (1.0, 10.69)];
        assert_eq!(y_bounds(&data, Scale::Log10), [7.0, 11.0]);
        assert_eq!(y_bounds(&[(0.0, 6.0)], Scale::Log10), [6.0, 7.0]);
    }

    #[test]
    fn flat_linear_series_still_has_height() {
        let [lo, hi] = y_bounds(&[(0.0, 0.3), (1.0, 0.3)], Scale::Linear);
        assert!(lo < 0.3 && hi > 0.3);
    }

    #[test]
    fn valuation_labels_use_log_formatter() {
        let labels = y_labels([7.0, 11.0], &valuation_spec());
        assert_eq!(labels, vec!["1.0e7", "1.0e9", "1.0e11"]);
    }

    #[test]
    fn seed_value_series_is_fully_plottable() {
        let points = Scenario::default().projection();
        assert_eq!(plot_points(&points, &value_spec()).len(), 6);
    }
}
