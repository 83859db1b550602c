//! Projection engine — dilutes the initial stake round by round.
//!
//! The fold is strict: every round produces exactly one point, in list
//! order, and nothing is validated. Negative dilution grows the stake,
//! dilution above 100 flips its sign, and NaN or infinity poisons the
//! point it appears in and everything after it.

use tracing::trace;

use crate::domain::{FundingRound, ProjectedPoint};

/// Project `initial_equity` (percent) through `rounds`.
pub fn project(initial_equity: f64, rounds: &[FundingRound]) -> Vec<ProjectedPoint> {
    let points: Vec<ProjectedPoint> = rounds
        .iter()
        .scan(initial_equity, |equity, round| {
            *equity *= round.retention_factor();
            Some(ProjectedPoint {
                stage: round.name.clone(),
                equity: *equity,
                value: (*equity / 100.0) * round.post_valuation,
                valuation: round.post_valuation,
            })
        })
        .collect();

    trace!(
        initial_equity,
        rounds = rounds.len(),
        final_equity = points.last().map(|p| p.equity),
        "projected scenario"
    );
    points
}

/// Last point of a projection, if any.
pub fn final_point(points: &[ProjectedPoint]) -> Option<&ProjectedPoint> {
    points.last()
}

/// Share of the initial stake still held after the last round.
///
/// NaN for an empty projection, and for a zero initial stake.
pub fn retained_fraction(initial_equity: f64, points: &[ProjectedPoint]) -> f64 {
    match final_point(points) {
        Some(last) => last.equity / initial_equity,
        None => f64::NAN,
    }
}

/// Total dilution across all rounds, in percent.
pub fn cumulative_dilution_percent(initial_equity: f64, points: &[ProjectedPoint]) -> f64 {
    100.0 * (1.0 - retained_fraction(initial_equity, points))
}
