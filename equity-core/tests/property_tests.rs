//! Property tests for projection invariants.
//!
//! Uses proptest to verify:
//! 1. Shape — one point per round, same order, same valuations
//! 2. First point — initial equity times the first retention factor
//! 3. Recurrence — each point is the previous one diluted by its round
//! 4. Identity — zero dilution everywhere leaves equity untouched
//! 5. Monotonicity — non-negative dilution never grows equity
//! 6. Purity — projecting twice gives identical output

use equity_core::{project, FundingRound};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_initial_equity() -> impl Strategy<Value = f64> {
    0.0..=1.0_f64
}

fn arb_round() -> impl Strategy<Value = FundingRound> {
    (0.0..=100.0_f64, 0.0..1e11_f64)
        .prop_map(|(dilution, valuation)| FundingRound::new("Round", dilution, valuation))
}

fn arb_rounds() -> impl Strategy<Value = Vec<FundingRound>> {
    prop::collection::vec(arb_round(), 0..20).prop_map(|rounds| {
        rounds
            .into_iter()
            .enumerate()
            .map(|(i, r)| FundingRound::new(format!("Round {i}"), r.dilution_percent, r.post_valuation))
            .collect()
    })
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
}

// ── 1. Shape ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn one_point_per_round_in_order(e in arb_initial_equity(), rounds in arb_rounds()) {
        let points = project(e, &rounds);
        prop_assert_eq!(points.len(), rounds.len());
        for (point, round) in points.iter().zip(rounds.iter()) {
            prop_assert_eq!(&point.stage, &round.name);
            prop_assert_eq!(point.valuation, round.post_valuation);
        }
    }
}

// ── 2 & 3. First point and recurrence ────────────────────────────────

proptest! {
    #[test]
    fn first_point_is_initial_times_retention(
        e in arb_initial_equity(),
        rounds in arb_rounds().prop_filter("non-empty", |r| !r.is_empty()),
    ) {
        let points = project(e, &rounds);
        let expected = e * (100.0 - rounds[0].dilution_percent) / 100.0;
        prop_assert!(close(points[0].equity, expected));
    }

    #[test]
    fn each_point_dilutes_the_previous(e in arb_initial_equity(), rounds in arb_rounds()) {
        let points = project(e, &rounds);
        for i in 1..points.len() {
            let expected = points[i - 1].equity * (100.0 - rounds[i].dilution_percent) / 100.0;
            prop_assert!(close(points[i].equity, expected));
        }
    }

    #[test]
    fn value_is_stake_of_valuation(e in arb_initial_equity(), rounds in arb_rounds()) {
        for point in project(e, &rounds) {
            prop_assert!(close(point.value, point.equity / 100.0 * point.valuation));
        }
    }
}

// ── 4 & 5. Identity and monotonicity ─────────────────────────────────

proptest! {
    #[test]
    fn zero_dilution_is_identity(e in arb_initial_equity(), n in 0usize..20) {
        let rounds: Vec<FundingRound> =
            (0..n).map(|i| FundingRound::new(format!("R{i}"), 0.0, 1e6)).collect();
        for point in project(e, &rounds) {
            prop_assert_eq!(point.equity, e);
        }
    }

    #[test]
    fn non_negative_dilution_never_grows(e in arb_initial_equity(), rounds in arb_rounds()) {
        let points = project(e, &rounds);
        let mut prev = e;
        for point in &points {
            prop_assert!(point.equity <= prev);
            prev = point.equity;
        }
    }
}

// ── 6. Purity ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn projection_is_deterministic(e in arb_initial_equity(), rounds in arb_rounds()) {
        prop_assert_eq!(project(e, &rounds), project(e, &rounds));
    }
}

#[test]
fn empty_round_list_projects_empty() {
    assert!(project(0.3, &[]).is_empty());
}
