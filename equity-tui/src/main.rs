//! Equity Playtool TUI — three views with vim-style navigation.
//!
//! Views:
//! 1. Journey — initial equity slider and the three projection charts
//! 2. Funding Rounds — editable dilution / valuation table
//! 3. Help — keyboard shortcuts, field notes, disclaimers

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use equity_core::{PlaytoolConfig, Scenario};
use equity_tui::app::AppState;
use equity_tui::{input, logging, persistence, ui};

#[derive(Parser)]
#[command(
    name = "equity-tui",
    about = "Equity Playtool — see your stake through each funding round"
)]
struct Args {
    /// Scenario TOML to start from. Written back with `w`. Seed rounds are used if it does not exist.
    #[arg(long, default_value = "scenario.toml")]
    scenario: PathBuf,

    /// Settings TOML. Defaults to <config dir>/equity-playtool/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Paths
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("equity-playtool");
    let state_path = config_dir.join("state.json");
    let config_path = args.config.unwrap_or_else(|| config_dir.join("config.toml"));
    let log_path = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("equity-playtool")
        .join("tui.log");

    logging::init(&log_path)?;

    // Inputs are loaded before the terminal switches modes so errors print normally.
    let config = PlaytoolConfig::load_or_default(&config_path)
        .with_context(|| format!("load config {}", config_path.display()))?;
    let scenario = if args.scenario.exists() {
        Scenario::from_file(&args.scenario)
            .with_context(|| format!("load scenario {}", args.scenario.display()))?
    } else {
        Scenario::default()
    };
    info!(rounds = scenario.rounds.len(), "starting tui");

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut app = AppState::new(scenario, &config, args.scenario);
    persistence::apply(&mut app, persistence::load(&state_path));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save preferences before exit
    if let Err(e) = persistence::save(&state_path, &persistence::extract(&app)) {
        warn!(error = %e, "could not save preferences");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render (recomputes the projection from the current scenario)
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
