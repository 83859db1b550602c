use std::path::PathBuf;

use equity_core::{Currency, PlaytoolConfig, Scenario};
use equity_tui::app::{AppState, EditTarget, Overlay, View};
use equity_tui::ui;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render(app: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn app() -> AppState {
    AppState::new(
        Scenario::default(),
        &PlaytoolConfig::default(),
        PathBuf::from("scenario.toml"),
    )
}

#[test]
fn journey_view_renders() {
    let screen = render(&app(), 160, 45);
    assert!(screen.contains("Journey"));
    assert!(screen.contains("Seed"));
}

#[test]
fn rounds_view_lists_every_round() {
    let mut app = app();
    app.active_view = View::Rounds;
    let screen = render(&app, 160, 45);
    for round in &app.scenario.rounds {
        assert!(screen.contains(round.name.as_str()), "missing {}", round.name);
    }
    assert!(screen.contains("$50.0B"));
}

#[test]
fn rounds_view_in_inr() {
    let mut app = app();
    app.active_view = View::Rounds;
    app.display_currency = Currency::Inr;
    let screen = render(&app, 160, 45);
    assert!(screen.contains("₹"));
}

#[test]
fn help_view_renders() {
    let mut app = app();
    app.active_view = View::Help;
    let screen = render(&app, 120, 80);
    assert!(screen.contains("82.5"));
}

#[test]
fn overlays_render() {
    let mut app = app();
    app.overlay = Overlay::Welcome;
    assert!(render(&app, 120, 40).contains("Welcome"));

    app.begin_edit(EditTarget::Valuation(0));
    assert!(render(&app, 120, 40).contains("Seed valuation"));
}

#[test]
fn nan_inputs_do_not_panic() {
    let mut app = app();
    app.scenario.set_dilution(0, f64::NAN);
    app.scenario.set_valuation(3, f64::INFINITY);
    for view in [View::Journey, View::Rounds, View::Help] {
        app.active_view = view;
        render(&app, 160, 45);
    }
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = app();
    for view in [View::Journey, View::Rounds, View::Help] {
        app.active_view = view;
        render(&app, 40, 12);
    }
}

#[test]
fn empty_scenario_renders() {
    let mut app = app();
    app.scenario = Scenario::new(0.3, Vec::new());
    app.clamp_cursors();
    for view in [View::Journey, View::Rounds] {
        app.active_view = view;
        render(&app, 160, 45);
    }
}
