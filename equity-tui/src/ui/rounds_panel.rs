//! View 2 — Funding Rounds: detail table with editable dilution and valuation.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use equity_core::{format_currency_at, format_percentage, format_valuation, Currency};

use crate::app::{AppState, RoundColumn};
use crate::theme;
use crate::ui::truncate;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let points = app.projection();
    let table = &app.rounds;
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(
            format!(
                "Initial equity {} | {} rounds",
                format_percentage(app.scenario.initial_equity),
                app.round_count()
            ),
            theme::muted(),
        ),
        Span::styled(
            "  [j/k]row [h/l]column [+/-]step [Enter]edit [w]rite [r]eset",
            theme::muted(),
        ),
    ]));
    lines.push(Line::from(""));

    if points.is_empty() {
        lines.push(Line::from(Span::styled(
            "No funding rounds. Load a scenario file with --scenario.",
            theme::muted(),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    lines.push(Line::from(Span::styled(
        format!(
            "{:<24} {:>10} {:>26} {:>12} {:>12} {:>14}",
            "Stage", "Dilution", "Valuation", "Your Equity", "Value USD", "Value INR"
        ),
        theme::accent_bold(),
    )));

    for (i, (round, point)) in app.scenario.rounds.iter().zip(points.iter()).enumerate() {
        let on_row = i == table.row;
        let cell_style = |column: RoundColumn, value: f64| -> Style {
            if on_row && table.column == column {
                theme::selected()
            } else {
                theme::figure(value)
            }
        };
        let name_style = if on_row { theme::accent_bold() } else { theme::text() };

        lines.push(Line::from(vec![
            Span::styled(format!("{:<24} ", truncate(&round.name, 24)), name_style),
            Span::styled(
                format!("{:>9}%", round.dilution_percent),
                cell_style(RoundColumn::Dilution, round.dilution_percent),
            ),
            Span::raw(" "),
            Span::styled(
                format!(
                    "{:>16} ({:>7})",
                    round.post_valuation,
                    format_valuation(round.post_valuation)
                ),
                cell_style(RoundColumn::Valuation, round.post_valuation),
            ),
            Span::raw(" "),
            Span::styled(
                format!("{:>12}", format_percentage(point.equity)),
                theme::figure(point.equity),
            ),
            Span::raw(" "),
            Span::styled(
                format!("{:>12}", format_currency_at(point.value, Currency::Usd, app.rate)),
                theme::figure(point.value),
            ),
            Span::raw(" "),
            Span::styled(
                format!("{:>14}", format_currency_at(point.value, Currency::Inr, app.rate)),
                theme::muted(),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "INR at a fixed {} per USD. Dilution hint 0-100%, valuation steps of {}.",
            app.rate.0,
            format_valuation(app.limits.valuation_step)
        ),
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), area);
}
