//! Display formatting — compact currency, valuation, percentage, log-axis ticks.
//!
//! Every function here is total: NaN and infinity render as text instead of
//! failing, so a malformed input shows up on screen rather than crashing
//! the view.

use crate::domain::{Currency, ExchangeRate};

/// A compact-notation unit: values at or above `threshold` are divided by
/// it and suffixed with `suffix`.
struct Unit {
    threshold: f64,
    suffix: &'static str,
}

/// en-US short scale, ascending.
const US_UNITS: [Unit; 5] = [
    Unit { threshold: 1.0, suffix: "" },
    Unit { threshold: 1e3, suffix: "K" },
    Unit { threshold: 1e6, suffix: "M" },
    Unit { threshold: 1e9, suffix: "B" },
    Unit { threshold: 1e12, suffix: "T" },
];

/// en-IN scale (thousand, lakh, crore, thousand crore, lakh crore), ascending.
const IN_UNITS: [Unit; 6] = [
    Unit { threshold: 1.0, suffix: "" },
    Unit { threshold: 1e3, suffix: "K" },
    Unit { threshold: 1e5, suffix: "L" },
    Unit { threshold: 1e7, suffix: "Cr" },
    Unit { threshold: 1e10, suffix: "KCr" },
    Unit { threshold: 1e12, suffix: "LCr" },
];

const COMPACT_FRACTION_DIGITS: i32 = 2;

/// Format a USD amount in compact notation, converting to INR at the fixed rate.
///
/// `format_currency(1_000_000.0, Currency::Usd)` is `"$1M"`;
/// the same amount in INR is `"₹8.25Cr"`.
pub fn format_currency(value: f64, currency: Currency) -> String {
    format_currency_at(value, currency, ExchangeRate::FIXED)
}

/// [`format_currency`] with an explicit USD→INR rate.
pub fn format_currency_at(value: f64, currency: Currency, rate: ExchangeRate) -> String {
    let amount = rate.convert(value, currency);
    let symbol = currency.symbol();

    if amount.is_nan() {
        return format!("{symbol}NaN");
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    if amount.is_infinite() {
        return format!("{sign}{symbol}∞");
    }

    let units: &[Unit] = match currency {
        Currency::Usd => &US_UNITS,
        Currency::Inr => &IN_UNITS,
    };
    let (mantissa, suffix) = compact(amount.abs(), units);
    let number = match currency {
        Currency::Usd => render_mantissa(mantissa, group_thousands),
        Currency::Inr => render_mantissa(mantissa, group_indian),
    };
    format!("{sign}{symbol}{number}{suffix}")
}

/// Company valuation label: `"$1.5B"` from a billion up, `"$250M"` below.
///
/// Sub-million values round to whole millions; exactly half a million
/// reads `"$0M"`.
pub fn format_valuation(value: f64) -> String {
    if value >= 1e9 {
        return format!("${}B", fixed(value / 1e9, 1));
    }
    let millions = value / 1e6;
    if millions == 0.5 {
        return "$0M".to_string();
    }
    format!("${}M", fixed(millions, 0))
}

/// Ownership percentage with three decimals. Not clamped.
pub fn format_percentage(value: f64) -> String {
    format!("{}%", fixed(value, 3))
}

/// Tick label for a log-scaled axis.
///
/// Small magnitudes reuse [`format_valuation`]; from 1e6 up the label is a
/// one-decimal mantissa and exponent such as `"5.0e9"`. Negative and NaN
/// input has no exponent and reads `"NaNeNaN"`.
pub fn log_scale_formatter(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let exp = value.log10().floor();
    if exp < 6.0 {
        return format_valuation(value);
    }
    if !exp.is_finite() {
        // NaN or +∞ exponent: the mantissa is undefined.
        return format!("NaNe{}", fixed(exp, 0));
    }
    let exp = exp as i32;
    let base = value / 10f64.powi(exp);
    format!("{}e{}", fixed(base, 1), exp)
}

/// Fixed-point rendering; exact halves round away from zero and non-finite
/// values are spelled out.
fn fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    } else if value == f64::INFINITY {
        return "Infinity".to_string();
    } else if value == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    // `{:.N}` rounds an exact half to even. A half is exact only when the
    // product carries no rounding error.
    let exact_half = scaled.fract().abs() == 0.5 && value.mul_add(scale, -scaled) == 0.0;
    let value = if exact_half {
        (scaled + 0.5 * scaled.signum()) / scale
    } else {
        value
    };
    format!("{value:.digits$}")
}

/// Pick the unit for a non-negative finite amount and return the rounded
/// mantissa. Moves up a unit when rounding reaches the next threshold.
fn compact(amount: f64, units: &[Unit]) -> (f64, &'static str) {
    let mut idx = units
        .iter()
        .rposition(|u| amount >= u.threshold)
        .unwrap_or(0);

    loop {
        let mantissa = round_to(amount / units[idx].threshold, COMPACT_FRACTION_DIGITS);
        match units.get(idx + 1) {
            Some(next) if mantissa * units[idx].threshold >= next.threshold => idx += 1,
            _ => return (mantissa, units[idx].suffix),
        }
    }
}

fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// Render a rounded mantissa with up to two decimals, trailing zeros dropped.
/// Integer parts shorter than five digits stay ungrouped, as compact
/// notation does.
fn render_mantissa(mantissa: f64, group: fn(&str) -> String) -> String {
    let text = format!("{mantissa:.2}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let grouped = if int_part.len() < 5 {
        int_part.to_string()
    } else {
        group(int_part)
    };
    if frac.is_empty() {
        grouped
    } else {
        format!("{grouped}.{frac}")
    }
}

/// `1234567` → `1,234,567`.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `1234567` → `12,34,567`: last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(tail);
    out
}
