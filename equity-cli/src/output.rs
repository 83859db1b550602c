//! Projection output: aligned text table, JSON report, CSV rows.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use equity_core::projection::cumulative_dilution_percent;
use equity_core::{
    format_currency_at, format_percentage, format_valuation, Currency, ExchangeRate,
    ProjectedPoint, Scenario,
};

/// JSON shape of `project --format json`.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub initial_equity: f64,
    pub currency: Currency,
    pub usd_to_inr: f64,
    pub cumulative_dilution_percent: f64,
    pub points: &'a [ProjectedPoint],
}

/// One CSV row: the raw point plus the round inputs that produced it.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    stage: &'a str,
    dilution_percent: f64,
    valuation: f64,
    equity: f64,
    value_usd: f64,
    value_display: String,
}

pub fn write_table<W: Write>(
    out: &mut W,
    scenario: &Scenario,
    points: &[ProjectedPoint],
    currency: Currency,
    rate: ExchangeRate,
) -> Result<()> {
    writeln!(
        out,
        "Initial equity: {}",
        format_percentage(scenario.initial_equity)
    )?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<24} {:>10} {:>10} {:>12} {:>12}",
        "Stage", "Dilution", "Valuation", "Your Equity", "Value"
    )?;
    writeln!(out, "{}", "-".repeat(72))?;
    for (round, point) in scenario.rounds.iter().zip(points) {
        writeln!(
            out,
            "{:<24} {:>9}% {:>10} {:>12} {:>12}",
            point.stage,
            round.dilution_percent,
            format_valuation(point.valuation),
            format_percentage(point.equity),
            format_currency_at(point.value, currency, rate),
        )?;
    }
    if !points.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "Cumulative dilution: {}",
            format_percentage(cumulative_dilution_percent(scenario.initial_equity, points))
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write>(
    out: &mut W,
    scenario: &Scenario,
    points: &[ProjectedPoint],
    currency: Currency,
    rate: ExchangeRate,
) -> Result<()> {
    let report = Report {
        initial_equity: scenario.initial_equity,
        currency,
        usd_to_inr: rate.0,
        cumulative_dilution_percent: cumulative_dilution_percent(scenario.initial_equity, points),
        points,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_csv<W: Write>(
    out: W,
    scenario: &Scenario,
    points: &[ProjectedPoint],
    currency: Currency,
    rate: ExchangeRate,
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    for (round, point) in scenario.rounds.iter().zip(points) {
        writer.serialize(CsvRow {
            stage: &point.stage,
            dilution_percent: round.dilution_percent,
            valuation: point.valuation,
            equity: point.equity,
            value_usd: point.value,
            value_display: format_currency_at(point.value, currency, rate),
        })?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> (Scenario, Vec<ProjectedPoint>) {
        let scenario = Scenario::default();
        let points = scenario.projection();
        (scenario, points)
    }

    #[test]
    fn table_lists_rounds_in_order() {
        let (scenario, points) = seed();
        let mut buf = Vec::new();
        write_table(&mut buf, &scenario, &points, Currency::Usd, ExchangeRate::FIXED).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("Initial equity: 0.300%"));
        let seed_at = text.find("Seed").unwrap();
        let unicorn_at = text.find("Series D: Unicorn").unwrap();
        assert!(seed_at < unicorn_at);
        assert!(text.contains("$60K"));
        assert!(text.contains("$50.0B"));
        assert!(text.contains("Cumulative dilution:"));
    }

    #[test]
    fn table_in_rupees() {
        let (scenario, points) = seed();
        let mut buf = Vec::new();
        write_table(&mut buf, &scenario, &points, Currency::Inr, ExchangeRate::FIXED).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('₹'));
        assert!(!text.contains("$60K"));
    }

    #[test]
    fn empty_scenario_prints_header_only() {
        let scenario = Scenario::new(0.5, Vec::new());
        let mut buf = Vec::new();
        write_table(&mut buf, &scenario, &[], Currency::Usd, ExchangeRate::FIXED).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Stage"));
        assert!(!text.contains("Cumulative"));
    }

    #[test]
    fn json_report_carries_points() {
        let (scenario, points) = seed();
        let mut buf = Vec::new();
        write_json(&mut buf, &scenario, &points, Currency::Inr, ExchangeRate::FIXED).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["currency"], "inr");
        assert_eq!(value["usd_to_inr"], 82.5);
        let arr = value["points"].as_array().unwrap();
        assert_eq!(arr.len(), 6);
        assert_eq!(arr[0]["stage"], "Seed");
        assert_eq!(arr[0]["valuation"], 25_000_000.0);
    }

    #[test]
    fn csv_has_header_and_one_row_per_round() {
        let (scenario, points) = seed();
        let mut buf = Vec::new();
        write_csv(&mut buf, &scenario, &points, Currency::Usd, ExchangeRate::FIXED).unwrap();

        let mut reader = csv::Reader::from_reader(buf.as_slice());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(
            headers.iter().collect::<Vec<_>>(),
            vec!["stage", "dilution_percent", "valuation", "equity", "value_usd", "value_display"]
        );
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[1][0], "Series A");
        assert_eq!(&rows[0][5], "$60K");
    }
}
