use serde::{Deserialize, Serialize};

/// Ownership after one funding round. Derived from a scenario on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    /// Name of the round this point follows.
    pub stage: String,
    /// Ownership in percent, on the same scale as the initial equity.
    pub equity: f64,
    /// USD value of the ownership at the round's post-money valuation.
    pub value: f64,
    /// The round's post-money valuation in USD.
    pub valuation: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_field_names() {
        let point = ProjectedPoint {
            stage: "Seed".into(),
            equity: 0.24,
            value: 60_000.0,
            valuation: 25_000_000.0,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["stage"], "Seed");
        assert_eq!(json["equity"], 0.24);
        assert_eq!(json["value"], 60_000.0);
        assert_eq!(json["valuation"], 25_000_000.0);
    }
}
