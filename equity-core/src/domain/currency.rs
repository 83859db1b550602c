//! Display currencies and the fixed USD→INR conversion.

use serde::{Deserialize, Serialize};

/// Currency a value is displayed in. All stored values are USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Inr,
}

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Inr => "₹",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Inr => "INR",
        }
    }

    /// The other display currency.
    pub fn toggle(self) -> Currency {
        match self {
            Currency::Usd => Currency::Inr,
            Currency::Inr => Currency::Usd,
        }
    }
}

/// USD→INR multiplier. Never fetched live.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeRate(pub f64);

impl ExchangeRate {
    /// Approximate rate baked into the tool.
    pub const FIXED: ExchangeRate = ExchangeRate(82.5);

    /// Convert a USD amount into `currency`.
    pub fn convert(self, usd: f64, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => usd,
            Currency::Inr => usd * self.0,
        }
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        Self::FIXED
    }
}
