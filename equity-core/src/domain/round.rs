//! FundingRound — one capital-raising event in the scenario.

use serde::{Deserialize, Serialize};

/// A funding round as the user entered it.
///
/// `dilution_percent` is expected in [0, 100] and `post_valuation` to be
/// non-negative, but neither is enforced here. Out-of-range values flow
/// through the projection unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingRound {
    pub name: String,
    /// Percentage of existing ownership given up in this round.
    #[serde(rename = "dilution")]
    pub dilution_percent: f64,
    /// Post-money valuation in USD.
    #[serde(rename = "valuation")]
    pub post_valuation: f64,
}

impl FundingRound {
    pub fn new(name: impl Into<String>, dilution_percent: f64, post_valuation: f64) -> Self {
        Self {
            name: name.into(),
            dilution_percent,
            post_valuation,
        }
    }

    /// Fraction of prior ownership kept after this round, `(100 - dilution) / 100`.
    pub fn retention_factor(&self) -> f64 {
        (100.0 - self.dilution_percent) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retention_factor_matches_dilution() {
        assert_eq!(FundingRound::new("Seed", 20.0, 25e6).retention_factor(), 0.8);
        assert_eq!(FundingRound::new("Flat", 0.0, 1e6).retention_factor(), 1.0);
        assert_eq!(FundingRound::new("Wipe", 100.0, 1e6).retention_factor(), 0.0);
    }

    #[test]
    fn out_of_range_dilution_is_not_rejected() {
        assert_eq!(FundingRound::new("Grow", -50.0, 1e6).retention_factor(), 1.5);
        assert_eq!(FundingRound::new("Flip", 150.0, 1e6).retention_factor(), -0.5);
    }
}
