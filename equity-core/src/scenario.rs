//! Scenario — the caller-owned inputs to a projection.
//!
//! A scenario is the initial stake plus the ordered round list. Edits
//! replace one field of one round in place and never reorder anything.
//! The projection is recomputed from scratch on every call to
//! [`Scenario::projection`]; nothing is cached.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{FundingRound, ProjectedPoint};
use crate::error::PlaytoolError;
use crate::projection::project;

/// Initial stake and funding rounds, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Starting ownership in percent, expected in [0, 1].
    pub initial_equity: f64,
    pub rounds: Vec<FundingRound>,
}

impl Default for Scenario {
    /// Illustrative path from a seed round to a fifty-billion outcome.
    fn default() -> Self {
        Self {
            initial_equity: 0.3,
            rounds: vec![
                FundingRound::new("Seed", 20.0, 25_000_000.0),
                FundingRound::new("Series A", 25.0, 75_000_000.0),
                FundingRound::new("Series B", 20.0, 200_000_000.0),
                FundingRound::new("Series C", 15.0, 500_000_000.0),
                FundingRound::new("Series D: Unicorn", 10.0, 1_000_000_000.0),
                FundingRound::new("Series E: Mega Success", 10.0, 50_000_000_000.0),
            ],
        }
    }
}

impl Scenario {
    pub fn new(initial_equity: f64, rounds: Vec<FundingRound>) -> Self {
        Self {
            initial_equity,
            rounds,
        }
    }

    /// Project the current inputs. Always a full recomputation.
    pub fn projection(&self) -> Vec<ProjectedPoint> {
        project(self.initial_equity, &self.rounds)
    }

    pub fn set_initial_equity(&mut self, value: f64) {
        self.initial_equity = value;
    }

    /// Replace one round's dilution. Returns false if `index` is out of range.
    pub fn set_dilution(&mut self, index: usize, value: f64) -> bool {
        match self.rounds.get_mut(index) {
            Some(round) => {
                debug!(round = %round.name, from = round.dilution_percent, to = value, "dilution edited");
                round.dilution_percent = value;
                true
            }
            None => false,
        }
    }

    /// Replace one round's valuation. Returns false if `index` is out of range.
    pub fn set_valuation(&mut self, index: usize, value: f64) -> bool {
        match self.rounds.get_mut(index) {
            Some(round) => {
                debug!(round = %round.name, from = round.post_valuation, to = value, "valuation edited");
                round.post_valuation = value;
                true
            }
            None => false,
        }
    }

    /// Load a scenario from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, PlaytoolError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PlaytoolError::io(path, e))?;
        let scenario: Scenario = toml::from_str(&content).map_err(|e| PlaytoolError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!(path = %path.display(), rounds = scenario.rounds.len(), "loaded scenario");
        Ok(scenario)
    }

    /// Parse a scenario from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, PlaytoolError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, PlaytoolError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the scenario as TOML. Creates parent directories if needed.
    pub fn save(&self, path: &Path) -> Result<(), PlaytoolError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| PlaytoolError::io(parent, e))?;
            }
        }
        std::fs::write(path, self.to_toml()?).map_err(|e| PlaytoolError::io(path, e))?;
        info!(path = %path.display(), "saved scenario");
        Ok(())
    }
}

/// Soft bounds and step sizes applied where values are collected.
///
/// The projection itself never clamps; only the front ends use these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLimits {
    pub initial_equity_min: f64,
    pub initial_equity_max: f64,
    pub initial_equity_step: f64,
    pub dilution_min: f64,
    pub dilution_max: f64,
    pub dilution_step: f64,
    pub valuation_min: f64,
    pub valuation_step: f64,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            initial_equity_min: 0.0,
            initial_equity_max: 1.0,
            initial_equity_step: 0.05,
            dilution_min: 0.0,
            dilution_max: 100.0,
            dilution_step: 1.0,
            valuation_min: 0.0,
            valuation_step: 1_000_000.0,
        }
    }
}

impl InputLimits {
    pub fn clamp_initial_equity(&self, value: f64) -> f64 {
        value.clamp(self.initial_equity_min, self.initial_equity_max)
    }

    pub fn clamp_dilution(&self, value: f64) -> f64 {
        value.clamp(self.dilution_min, self.dilution_max)
    }

    pub fn clamp_valuation(&self, value: f64) -> f64 {
        value.max(self.valuation_min)
    }

    /// Move the slider one notch (`direction` is +1 or -1), snapping to the step grid.
    pub fn step_initial_equity(&self, value: f64, direction: i32) -> f64 {
        let next = snap(value, self.initial_equity_step, self.initial_equity_min, direction);
        self.clamp_initial_equity(next)
    }

    pub fn step_dilution(&self, value: f64, direction: i32) -> f64 {
        let next = snap(value, self.dilution_step, self.dilution_min, direction);
        self.clamp_dilution(next)
    }

    pub fn step_valuation(&self, value: f64, direction: i32) -> f64 {
        let next = snap(value, self.valuation_step, self.valuation_min, direction);
        self.clamp_valuation(next)
    }
}

/// Round `value` onto the `step` grid and move `direction` notches.
/// NaN restarts from `floor`.
fn snap(value: f64, step: f64, floor: f64, direction: i32) -> f64 {
    if value.is_nan() {
        return floor;
    }
    if step <= 0.0 {
        return value;
    }
    ((value / step).round() + direction as f64) * step
}
