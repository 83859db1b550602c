//! Equity Playtool CLI — projection, formatting and scenario commands.
//!
//! Commands:
//! - `project` — print the projection of a scenario as a table, JSON or CSV
//! - `format` — run one display formatter on a number
//! - `init` — write the seed scenario to a TOML file for editing

mod output;

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use equity_core::{
    format_currency_at, format_percentage, format_valuation, log_scale_formatter, Currency,
    PlaytoolConfig, Scenario,
};

#[derive(Parser)]
#[command(
    name = "equity-playtool",
    about = "Equity Playtool CLI — project your ownership through funding rounds"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the equity projection of a scenario.
    Project {
        /// Scenario TOML. Defaults to the built-in seed rounds.
        #[arg(long)]
        scenario: Option<PathBuf>,

        /// Override the scenario's initial equity (percent, clamped to the slider range).
        #[arg(long)]
        initial_equity: Option<f64>,

        /// Currency for stake values.
        #[arg(long, value_enum, default_value_t = CurrencyArg::Usd)]
        currency: CurrencyArg,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Settings TOML. Defaults to <config dir>/equity-playtool/config.toml.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Format a single number the way the charts and table do.
    Format {
        /// Which formatter to run.
        #[arg(value_enum)]
        kind: FormatKind,

        /// Value to format. Accepts NaN and inf.
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Currency for `currency` formatting.
        #[arg(long, value_enum, default_value_t = CurrencyArg::Usd)]
        currency: CurrencyArg,

        /// Settings TOML. Defaults to <config dir>/equity-playtool/config.toml.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write the seed scenario to a TOML file.
    Init {
        /// Destination path.
        path: PathBuf,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CurrencyArg {
    Usd,
    Inr,
}

impl From<CurrencyArg> for Currency {
    fn from(arg: CurrencyArg) -> Self {
        match arg {
            CurrencyArg::Usd => Currency::Usd,
            CurrencyArg::Inr => Currency::Inr,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatKind {
    Currency,
    Valuation,
    Percentage,
    LogAxis,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Project {
            scenario,
            initial_equity,
            currency,
            format,
            config,
        } => run_project(scenario, initial_equity, currency.into(), format, config),
        Commands::Format {
            kind,
            value,
            currency,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            println!("{}", format_one(kind, value, currency.into(), &config));
            Ok(())
        }
        Commands::Init { path, force } => run_init(&path, force),
    }
}

/// Logs go to stderr so stdout stays clean for table/JSON/CSV output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<PlaytoolConfig> {
    match path {
        Some(path) => PlaytoolConfig::from_file(path)
            .with_context(|| format!("load config {}", path.display())),
        None => {
            let Some(dir) = dirs::config_dir() else {
                return Ok(PlaytoolConfig::default());
            };
            let path = dir.join("equity-playtool").join("config.toml");
            PlaytoolConfig::load_or_default(&path)
                .with_context(|| format!("load config {}", path.display()))
        }
    }
}

fn load_scenario(
    path: Option<&Path>,
    initial_equity: Option<f64>,
    config: &PlaytoolConfig,
) -> Result<Scenario> {
    let mut scenario = match path {
        Some(path) => Scenario::from_file(path)
            .with_context(|| format!("load scenario {}", path.display()))?,
        None => Scenario::default(),
    };
    if let Some(requested) = initial_equity {
        let clamped = config.input_limits().clamp_initial_equity(requested);
        if clamped != requested {
            warn!(requested, clamped, "initial equity outside slider range");
        }
        scenario.set_initial_equity(clamped);
    }
    Ok(scenario)
}

fn run_project(
    scenario_path: Option<PathBuf>,
    initial_equity: Option<f64>,
    currency: Currency,
    format: OutputFormat,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let scenario = load_scenario(scenario_path.as_deref(), initial_equity, &config)?;
    let points = scenario.projection();
    let rate = config.exchange_rate();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => output::write_table(&mut out, &scenario, &points, currency, rate),
        OutputFormat::Json => output::write_json(&mut out, &scenario, &points, currency, rate),
        OutputFormat::Csv => output::write_csv(out, &scenario, &points, currency, rate),
    }
}

fn format_one(kind: FormatKind, value: f64, currency: Currency, config: &PlaytoolConfig) -> String {
    match kind {
        FormatKind::Currency => format_currency_at(value, currency, config.exchange_rate()),
        FormatKind::Valuation => format_valuation(value),
        FormatKind::Percentage => format_percentage(value),
        FormatKind::LogAxis => log_scale_formatter(value),
    }
}

fn run_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite",
            path.display()
        );
    }
    Scenario::default()
        .save(path)
        .with_context(|| format!("write scenario {}", path.display()))?;
    info!(path = %path.display(), "wrote seed scenario");
    println!("Seed scenario written to: {}", path.display());
    Ok(())
}
