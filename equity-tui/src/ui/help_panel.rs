//! View 3 — Help: key bindings, what each figure means, assumptions.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global");
    key(&mut lines, "1-3 / ?", "Switch view (Journey, Funding Rounds, Help)");
    key(&mut lines, "Tab / Shift+Tab", "Cycle views forward / back");
    key(&mut lines, "i", "Type an initial equity percentage");
    key(&mut lines, "c", "Swap primary currency (USD / INR)");
    key(&mut lines, "w", "Write scenario to the scenario file");
    key(&mut lines, "r", "Reset to the seed rounds");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Journey");
    key(&mut lines, "h / l", "Slide initial equity down / up");
    key(&mut lines, "j / k", "Select the stage described under the charts");
    lines.push(Line::from(""));

    section(&mut lines, "Funding Rounds");
    key(&mut lines, "j / k", "Move between rounds");
    key(&mut lines, "h / l", "Switch between dilution and valuation");
    key(&mut lines, "+ / -", "Step the focused cell");
    key(&mut lines, "Enter", "Type a new value for the focused cell");
    lines.push(Line::from(""));

    section(&mut lines, "Figures");
    key(
        &mut lines,
        "Initial equity",
        "The ownership you start with. Early employees typically hold 0.1% to 1%.",
    );
    key(
        &mut lines,
        "Stage",
        "Stages of company growth, from seed to unicorn ($1B+ valuation).",
    );
    key(
        &mut lines,
        "Dilution",
        "How much your ownership shrinks in a round. Typically 15-25% per round.",
    );
    key(
        &mut lines,
        "Valuation",
        "Total company value after the round. Usually rises sharply each round.",
    );
    key(&mut lines, "Your Equity", "Ownership left after dilution from each round.");
    key(
        &mut lines,
        "Your Value",
        "Your equity priced at the round's valuation, in USD and INR.",
    );
    lines.push(Line::from(""));

    section(&mut lines, "Key Assumptions & Disclaimers");
    note(&mut lines, "Illustrative valuation", "Based on today's valuation and exit assumptions.");
    note(
        &mut lines,
        "Vesting & acceleration",
        "Equity vests over 4 years with a 1 year cliff. Unvested shares are forfeited if you leave early.",
    );
    note(
        &mut lines,
        "Liquidity",
        "Private shares stay illiquid until an exit event (IPO, acquisition) or a company buyback.",
    );
    note(
        &mut lines,
        "High-risk nature",
        "Startups may never reach a liquidity event. Your equity's value depends on the company's success.",
    );
    note(
        &mut lines,
        "Exchange rate",
        &format!("INR figures use a fixed {} rupees per dollar.", app.rate.0),
    );
    note(
        &mut lines,
        "Disclaimer",
        "This tool is for educational purposes only and is not legally binding.",
    );

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(para, area);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}

fn note(lines: &mut Vec<Line<'_>>, title: &str, body: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {title}: "), theme::accent()),
        Span::styled(body.to_string(), theme::text()),
    ]));
}
