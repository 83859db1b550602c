//! Equity Playtool TUI — terminal interface for the dilution projection.
//!
//! Provides interactive exploration of a funding scenario with:
//! - Initial equity slider
//! - Equity %, valuation and stake-value charts (log axes for money)
//! - Editable funding round table with USD and INR values
//! - Help view with field explanations and disclaimers

pub mod app;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
