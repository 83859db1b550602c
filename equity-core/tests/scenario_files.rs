//! Scenario and config files on disk, plus the seed walkthrough.

use equity_core::{
    format_currency, format_percentage, format_valuation, Currency, FundingRound,
    PlaytoolConfig, PlaytoolError, Scenario,
};
use tempfile::TempDir;

#[test]
fn save_then_load_scenario() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("scenario.toml");

    let mut scenario = Scenario::default();
    scenario.set_dilution(1, 18.5);
    scenario.save(&path).unwrap();

    let loaded = Scenario::from_file(&path).unwrap();
    assert_eq!(loaded, scenario);
    assert_eq!(loaded.rounds[1].dilution_percent, 18.5);
}

#[test]
fn hand_written_scenario_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("two_rounds.toml");
    std::fs::write(
        &path,
        r#"
initial_equity = 0.3

[[rounds]]
name = "Seed"
dilution = 20
valuation = 25_000_000

[[rounds]]
name = "Series A"
dilution = 25.0
valuation = 75_000_000.0
"#,
    )
    .unwrap();

    let scenario = Scenario::from_file(&path).unwrap();
    let points = scenario.projection();
    assert_eq!(points.len(), 2);
    assert!((points[0].value - 60_000.0).abs() < 1e-6);
    assert!((points[1].value - 135_000.0).abs() < 1e-6);
}

#[test]
fn missing_scenario_file_reports_path() {
    let err = Scenario::from_file(std::path::Path::new("/nonexistent/scenario.toml")).unwrap_err();
    assert!(matches!(err, PlaytoolError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/scenario.toml"));
}

#[test]
fn unparseable_scenario_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "rounds = \"not a list\"").unwrap();
    let err = Scenario::from_file(&path).unwrap_err();
    assert!(matches!(err, PlaytoolError::Parse { .. }));
}

#[test]
fn config_file_overrides_rate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "usd_to_inr = 100.0\nvaluation_step = 500000.0\n").unwrap();

    let config = PlaytoolConfig::load_or_default(&path).unwrap();
    assert_eq!(config.usd_to_inr, 100.0);
    assert_eq!(config.dilution_step, 1.0);
    assert_eq!(
        equity_core::format_currency_at(1_000.0, Currency::Inr, config.exchange_rate()),
        "₹1L"
    );
}

#[test]
fn seed_walkthrough_renders() {
    let points = Scenario::default().projection();
    let last = points.last().unwrap();

    assert_eq!(last.stage, "Series E: Mega Success");
    assert_eq!(format_percentage(last.equity), "0.099%");
    assert_eq!(format_valuation(last.valuation), "$50.0B");
    assert_eq!(format_currency(last.value, Currency::Usd), "$49.57M");
    assert_eq!(format_valuation(points[0].valuation), "$25M");
    assert_eq!(format_currency(points[0].value, Currency::Usd), "$60K");
}

#[test]
fn garbage_inputs_still_render() {
    let scenario = Scenario::new(
        0.3,
        vec![
            FundingRound::new("Typo", f64::NAN, 1e6),
            FundingRound::new("After", 10.0, 1e7),
        ],
    );
    let points = scenario.projection();
    assert_eq!(format_percentage(points[1].equity), "NaN%");
    assert_eq!(format_currency(points[1].value, Currency::Inr), "₹NaN");
}
