//! View 1 — Journey: initial equity slider, three charts, selected-stage readout.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use equity_core::projection::{cumulative_dilution_percent, final_point, retained_fraction};
use equity_core::{format_currency_at, format_percentage, format_valuation, ProjectedPoint};

use crate::app::AppState;
use crate::theme;
use crate::ui::charts;
use crate::ui::widgets::Slider;

const SLIDER_WIDTH: usize = 40;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let points = app.projection();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(area);

    render_slider(f, chunks[0], app);
    render_charts(f, chunks[1], app, &points);
    render_readout(f, chunks[2], app, &points);
}

fn render_slider(f: &mut Frame, area: Rect, app: &AppState) {
    let limits = &app.limits;
    let slider = Slider::new(
        "Initial Equity Percentage",
        app.scenario.initial_equity,
        limits.initial_equity_min,
        limits.initial_equity_max,
    )
    .value_text(format!(
        "(Current: {})",
        format_percentage(app.scenario.initial_equity)
    ));

    let lines = vec![
        slider.line(SLIDER_WIDTH, true),
        slider.range_line(
            &format!("{}%", limits.initial_equity_min),
            &format!("{}%", limits.initial_equity_max),
            SLIDER_WIDTH,
        ),
        Line::from(Span::styled(
            "[h/l]adjust [i]type value [j/k]select stage [c]urrency",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_charts(f: &mut Frame, area: Rect, app: &AppState, points: &[ProjectedPoint]) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let selected = app.journey.selected_stage;
    charts::render(f, columns[0], points, selected, &charts::equity_spec());
    charts::render(f, columns[1], points, selected, &charts::valuation_spec());
    charts::render(f, columns[2], points, selected, &charts::value_spec());
}

fn render_readout(f: &mut Frame, area: Rect, app: &AppState, points: &[ProjectedPoint]) {
    let mut lines: Vec<Line> = Vec::new();

    match points.get(app.journey.selected_stage) {
        Some(point) => {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", point.stage), theme::accent_bold()),
                Span::styled("equity ", theme::muted()),
                Span::styled(format_percentage(point.equity), theme::figure(point.equity)),
                Span::styled("  valuation ", theme::muted()),
                Span::styled(format_valuation(point.valuation), theme::figure(point.valuation)),
                Span::styled("  value ", theme::muted()),
                Span::styled(dual_currency(app, point.value), theme::figure(point.value)),
            ]));
        }
        None => lines.push(Line::from(Span::styled(
            "No funding rounds to project.",
            theme::muted(),
        ))),
    }

    if let Some(last) = final_point(points) {
        let initial = app.scenario.initial_equity;
        lines.push(Line::from(vec![
            Span::styled("After ", theme::muted()),
            Span::styled(last.stage.clone(), theme::text()),
            Span::styled(": you keep ", theme::muted()),
            Span::styled(
                format_percentage(100.0 * retained_fraction(initial, points)),
                theme::text(),
            ),
            Span::styled(" of your initial stake (cumulative dilution ", theme::muted()),
            Span::styled(
                format_percentage(cumulative_dilution_percent(initial, points)),
                theme::text(),
            ),
            Span::styled(")", theme::muted()),
        ]));
    }

    f.render_widget(Paragraph::new(lines), area);
}

/// `"$135K (₹1.11Cr)"`, with the display currency first.
pub fn dual_currency(app: &AppState, usd: f64) -> String {
    let primary = app.display_currency;
    format!(
        "{} ({})",
        format_currency_at(usd, primary, app.rate),
        format_currency_at(usd, primary.toggle(), app.rate)
    )
}
