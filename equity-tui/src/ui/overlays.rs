//! Overlays — first-run welcome and the numeric edit prompt.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::{AppState, EditTarget};
use crate::theme;
use crate::ui::centered_rect;

pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 50, area);
    f.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::styled("Equity Playtool", theme::accent_bold())),
        Line::from(Span::styled(
            "Visualize your equity journey through each funding round",
            theme::muted(),
        )),
        Line::from(""),
        Line::from("Slide your initial equity on the Journey view (h/l)."),
        Line::from("Edit dilution and valuation per round on the Funding Rounds view (2)."),
        Line::from("Every change recomputes all charts and the table."),
        Line::from(""),
        Line::from(Span::styled("Press any key to start. ? shows help.", theme::accent())),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Welcome ");
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        popup,
    );
}

pub fn render_edit(f: &mut Frame, area: Rect, app: &AppState, target: EditTarget) {
    let popup = centered_rect(50, 30, area);
    f.render_widget(Clear, popup);

    let hint = match target {
        EditTarget::InitialEquity => {
            format!(
                "Percent between {} and {}.",
                app.limits.initial_equity_min, app.limits.initial_equity_max
            )
        }
        EditTarget::Dilution(_) => "Percent, usually 0 to 100.".to_string(),
        EditTarget::Valuation(_) => "Post-money valuation in USD, e.g. 75,000,000.".to_string(),
    };

    let lines = vec![
        Line::from(Span::styled(target.label(&app.scenario), theme::accent_bold())),
        Line::from(""),
        Line::from(vec![
            Span::styled("> ", theme::accent()),
            Span::styled(app.edit_input.clone(), theme::text()),
            Span::styled("_", theme::accent()),
        ]),
        Line::from(""),
        Line::from(Span::styled(hint, theme::muted())),
        Line::from(Span::styled("[Enter]apply [Esc]cancel", theme::muted())),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Edit ");
    f.render_widget(Paragraph::new(lines).block(block), popup);
}
