//! Playtool settings — exchange rate and input step sizes.
//!
//! Stored as TOML. Every field is optional in the file; anything missing
//! keeps its built-in default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ExchangeRate;
use crate::error::PlaytoolError;
use crate::scenario::InputLimits;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaytoolConfig {
    /// USD→INR multiplier used for the rupee column.
    pub usd_to_inr: f64,
    /// Slider step for the initial equity percentage.
    pub initial_equity_step: f64,
    /// Step for dilution percent edits.
    pub dilution_step: f64,
    /// Step for valuation edits, in USD.
    pub valuation_step: f64,
}

impl Default for PlaytoolConfig {
    fn default() -> Self {
        let limits = InputLimits::default();
        Self {
            usd_to_inr: ExchangeRate::FIXED.0,
            initial_equity_step: limits.initial_equity_step,
            dilution_step: limits.dilution_step,
            valuation_step: limits.valuation_step,
        }
    }
}

impl PlaytoolConfig {
    /// Load settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, PlaytoolError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PlaytoolError::io(path, e))?;
        let config = toml::from_str(&content).map_err(|e| PlaytoolError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse settings from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, PlaytoolError> {
        Ok(toml::from_str(content)?)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, PlaytoolError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn exchange_rate(&self) -> ExchangeRate {
        ExchangeRate(self.usd_to_inr)
    }

    /// Input limits with this config's step sizes.
    pub fn input_limits(&self) -> InputLimits {
        InputLimits {
            initial_equity_step: self.initial_equity_step,
            dilution_step: self.dilution_step,
            valuation_step: self.valuation_step,
            ..InputLimits::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_constants() {
        let config = PlaytoolConfig::default();
        assert_eq!(config.usd_to_inr, 82.5);
        assert_eq!(config.initial_equity_step, 0.05);
        assert_eq!(config.dilution_step, 1.0);
        assert_eq!(config.valuation_step, 1_000_000.0);
        assert_eq!(config.exchange_rate(), ExchangeRate::FIXED);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = PlaytoolConfig::from_toml("usd_to_inr = 83.1\n").unwrap();
        assert_eq!(config.usd_to_inr, 83.1);
        assert_eq!(config.valuation_step, 1_000_000.0);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(PlaytoolConfig::from_toml("").unwrap(), PlaytoolConfig::default());
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(PlaytoolConfig::from_toml("usd_to_inr = \"lots\"").is_err());
    }

    #[test]
    fn missing_file_falls_back() {
        let config =
            PlaytoolConfig::load_or_default(Path::new("/nonexistent/equity/config.toml")).unwrap();
        assert_eq!(config, PlaytoolConfig::default());
    }

    #[test]
    fn limits_carry_configured_steps() {
        let config = PlaytoolConfig {
            valuation_step: 5_000_000.0,
            ..PlaytoolConfig::default()
        };
        let limits = config.input_limits();
        assert_eq!(limits.valuation_step, 5_000_000.0);
        assert_eq!(limits.dilution_max, 100.0);
    }
}
