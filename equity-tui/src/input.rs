//! Keyboard input dispatch — overlays → global keys → view-specific handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, EditTarget, Overlay, RoundColumn, View};

/// Handle a key event. Clears `app.running` on quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::Edit(target) => {
            let target = *target;
            handle_edit_overlay(app, target, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_view = View::Journey; return; }
        KeyCode::Char('2') => { app.active_view = View::Rounds; return; }
        KeyCode::Char('3') | KeyCode::Char('?') => { app.active_view = View::Help; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_view = app.active_view.prev();
            } else {
                app.active_view = app.active_view.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_view = app.active_view.prev();
            return;
        }
        KeyCode::Char('i') => {
            app.begin_edit(EditTarget::InitialEquity);
            return;
        }
        KeyCode::Char('c') => {
            app.display_currency = app.display_currency.toggle();
            return;
        }
        KeyCode::Char('w') => {
            app.export_scenario();
            return;
        }
        KeyCode::Char('r') => {
            app.reset_scenario();
            return;
        }
        _ => {}
    }

    // 3. View-specific keys.
    match app.active_view {
        View::Journey => handle_journey_key(app, key),
        View::Rounds => handle_rounds_key(app, key),
        View::Help => {} // display only
    }
}

fn handle_edit_overlay(app: &mut AppState, target: EditTarget, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => app.commit_edit(target),
        KeyCode::Backspace => {
            app.edit_input.pop();
        }
        KeyCode::Char(c) => {
            app.edit_input.push(c);
        }
        _ => {}
    }
}

fn handle_journey_key(app: &mut AppState, key: KeyEvent) {
    let stage_count = app.round_count();

    match key.code {
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('-') => {
            app.nudge_initial_equity(-1);
        }
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
            app.nudge_initial_equity(1);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if stage_count > 0 && app.journey.selected_stage + 1 < stage_count {
                app.journey.selected_stage += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.journey.selected_stage = app.journey.selected_stage.saturating_sub(1);
        }
        KeyCode::Enter => {
            app.begin_edit(EditTarget::InitialEquity);
        }
        _ => {}
    }
}

fn handle_rounds_key(app: &mut AppState, key: KeyEvent) {
    let row_count = app.round_count();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if row_count > 0 && app.rounds.row + 1 < row_count {
                app.rounds.row += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.rounds.row = app.rounds.row.saturating_sub(1);
        }
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('l') | KeyCode::Right => {
            app.rounds.column = app.rounds.column.toggle();
        }
        KeyCode::Char('+') | KeyCode::Char('=') => app.nudge_round_cell(1),
        KeyCode::Char('-') => app.nudge_round_cell(-1),
        KeyCode::Enter => {
            if row_count > 0 {
                let target = match app.rounds.column {
                    RoundColumn::Dilution => EditTarget::Dilution(app.rounds.row),
                    RoundColumn::Valuation => EditTarget::Valuation(app.rounds.row),
                };
                app.begin_edit(target);
            }
        }
        _ => {}
    }
}
