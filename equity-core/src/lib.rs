//! Equity Playtool Core — funding round model, dilution projection, display formatting.
//!
//! This crate contains everything the front ends share:
//! - Domain types (funding rounds, projected points, currencies)
//! - The projection fold (initial equity diluted round by round)
//! - Display formatters (compact currency, valuation, percentage, log-axis ticks)
//! - Scenario model with in-place edits and input-boundary clamping
//! - TOML configuration and scenario files

pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod projection;
pub mod scenario;

pub use config::PlaytoolConfig;
pub use domain::{Currency, ExchangeRate, FundingRound, ProjectedPoint};
pub use error::PlaytoolError;
pub use format::{
    format_currency, format_currency_at, format_percentage, format_valuation, log_scale_formatter,
};
pub use projection::project;
pub use scenario::{InputLimits, Scenario};
