//! Domain types for the Equity Playtool

pub mod currency;
pub mod point;
pub mod round;

pub use currency::{Currency, ExchangeRate};
pub use point::ProjectedPoint;
pub use round::FundingRound;
