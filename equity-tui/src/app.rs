//! Application state — single-owner, main-thread only.
//!
//! The scenario lives here and is the only mutable input. Every draw asks
//! it for a fresh projection.

use std::path::PathBuf;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use equity_core::{Currency, ExchangeRate, InputLimits, PlaytoolConfig, ProjectedPoint, Scenario};

/// Which view is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Journey,
    Rounds,
    Help,
}

impl View {
    pub const COUNT: usize = 3;

    pub fn index(self) -> usize {
        match self {
            View::Journey => 0,
            View::Rounds => 1,
            View::Help => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(View::Journey),
            1 => Some(View::Rounds),
            2 => Some(View::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Journey => "Journey",
            View::Rounds => "Funding Rounds",
            View::Help => "Help",
        }
    }

    pub fn next(self) -> View {
        match self {
            View::Journey => View::Rounds,
            View::Rounds => View::Help,
            View::Help => View::Journey,
        }
    }

    pub fn prev(self) -> View {
        match self {
            View::Journey => View::Help,
            View::Rounds => View::Journey,
            View::Help => View::Rounds,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Editable column in the rounds table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundColumn {
    Dilution,
    Valuation,
}

impl RoundColumn {
    pub fn toggle(self) -> RoundColumn {
        match self {
            RoundColumn::Dilution => RoundColumn::Valuation,
            RoundColumn::Valuation => RoundColumn::Dilution,
        }
    }
}

/// Field a typed edit will land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    InitialEquity,
    Dilution(usize),
    Valuation(usize),
}

impl EditTarget {
    pub fn label(self, scenario: &Scenario) -> String {
        let round_name = |i: usize| {
            scenario
                .rounds
                .get(i)
                .map(|r| r.name.as_str())
                .unwrap_or("?")
                .to_string()
        };
        match self {
            EditTarget::InitialEquity => "Initial equity (%)".to_string(),
            EditTarget::Dilution(i) => format!("{} dilution (%)", round_name(i)),
            EditTarget::Valuation(i) => format!("{} valuation (USD)", round_name(i)),
        }
    }
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    Edit(EditTarget),
}

/// Journey view state.
#[derive(Debug, Clone, Default)]
pub struct JourneyState {
    /// Stage whose values are spelled out under the charts.
    pub selected_stage: usize,
}

/// Rounds table cursor.
#[derive(Debug, Clone)]
pub struct RoundsTableState {
    pub row: usize,
    pub column: RoundColumn,
}

impl Default for RoundsTableState {
    fn default() -> Self {
        Self {
            row: 0,
            column: RoundColumn::Dilution,
        }
    }
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_view: View,
    pub running: bool,

    // Inputs
    pub scenario: Scenario,
    pub limits: InputLimits,
    pub rate: ExchangeRate,
    pub display_currency: Currency,

    // View states
    pub journey: JourneyState,
    pub rounds: RoundsTableState,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel, NaiveTime)>,
    pub overlay: Overlay,
    pub edit_input: String,

    // Paths
    pub scenario_path: PathBuf,
}

impl AppState {
    pub fn new(scenario: Scenario, config: &PlaytoolConfig, scenario_path: PathBuf) -> Self {
        Self {
            active_view: View::Journey,
            running: true,
            scenario,
            limits: config.input_limits(),
            rate: config.exchange_rate(),
            display_currency: Currency::Usd,
            journey: JourneyState::default(),
            rounds: RoundsTableState::default(),
            status_message: None,
            overlay: Overlay::None,
            edit_input: String::new(),
            scenario_path,
        }
    }

    /// Fresh projection of the current inputs.
    pub fn projection(&self) -> Vec<ProjectedPoint> {
        self.scenario.projection()
    }

    pub fn round_count(&self) -> usize {
        self.scenario.rounds.len()
    }

    /// Move the initial-equity slider one notch.
    pub fn nudge_initial_equity(&mut self, direction: i32) {
        let next = self
            .limits
            .step_initial_equity(self.scenario.initial_equity, direction);
        self.scenario.set_initial_equity(next);
    }

    /// Step the focused cell of the rounds table.
    pub fn nudge_round_cell(&mut self, direction: i32) {
        let row = self.rounds.row;
        let Some(round) = self.scenario.rounds.get(row) else {
            return;
        };
        match self.rounds.column {
            RoundColumn::Dilution => {
                let next = self.limits.step_dilution(round.dilution_percent, direction);
                self.scenario.set_dilution(row, next);
            }
            RoundColumn::Valuation => {
                let next = self.limits.step_valuation(round.post_valuation, direction);
                self.scenario.set_valuation(row, next);
            }
        }
    }

    /// Open the edit prompt pre-filled with the target's current value.
    pub fn begin_edit(&mut self, target: EditTarget) {
        let current = match target {
            EditTarget::InitialEquity => Some(self.scenario.initial_equity),
            EditTarget::Dilution(i) => self.scenario.rounds.get(i).map(|r| r.dilution_percent),
            EditTarget::Valuation(i) => self.scenario.rounds.get(i).map(|r| r.post_valuation),
        };
        let Some(current) = current else {
            return;
        };
        self.edit_input = if current.is_finite() {
            current.to_string()
        } else {
            String::new()
        };
        self.overlay = Overlay::Edit(target);
    }

    /// Apply the typed value to `target` and close the prompt.
    ///
    /// Text that is not a number becomes NaN and flows through the
    /// projection. Only the initial-equity slider is clamped.
    pub fn commit_edit(&mut self, target: EditTarget) {
        let cleaned: String = self
            .edit_input
            .trim()
            .chars()
            .filter(|c| *c != ',' && *c != '_')
            .collect();
        let parsed = cleaned.parse::<f64>();
        let value = parsed.as_ref().copied().unwrap_or(f64::NAN);

        match target {
            EditTarget::InitialEquity => {
                self.scenario
                    .set_initial_equity(self.limits.clamp_initial_equity(value));
            }
            EditTarget::Dilution(i) => {
                self.scenario.set_dilution(i, value);
            }
            EditTarget::Valuation(i) => {
                self.scenario.set_valuation(i, value);
            }
        }

        let label = target.label(&self.scenario);
        match parsed {
            Ok(_) => {
                info!(field = %label, value, "edited");
                self.set_status(format!("{label} set to {value}"));
            }
            Err(_) => {
                warn!(field = %label, input = %self.edit_input, "non-numeric edit");
                self.set_warning(format!("{label}: '{}' is not a number", self.edit_input));
            }
        }
        self.edit_input.clear();
        self.overlay = Overlay::None;
    }

    pub fn cancel_edit(&mut self) {
        self.edit_input.clear();
        self.overlay = Overlay::None;
    }

    /// Write the scenario to `scenario_path`.
    pub fn export_scenario(&mut self) {
        match self.scenario.save(&self.scenario_path) {
            Ok(()) => {
                let msg = format!("Saved scenario to {}", self.scenario_path.display());
                self.set_status(msg);
            }
            Err(e) => {
                warn!(error = %e, "scenario export failed");
                self.set_error(format!("Save failed: {e}"));
            }
        }
    }

    /// Restore the seed scenario, keeping the cursor in range.
    pub fn reset_scenario(&mut self) {
        self.scenario = Scenario::default();
        self.clamp_cursors();
        self.set_status("Reset to seed rounds");
    }

    pub fn clamp_cursors(&mut self) {
        let last = self.round_count().saturating_sub(1);
        self.rounds.row = self.rounds.row.min(last);
        self.journey.selected_stage = self.journey.selected_stage.min(last);
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info, now()));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning, now()));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error, now()));
    }
}

fn now() -> NaiveTime {
    chrono::Local::now().time()
}
