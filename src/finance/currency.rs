//! Static exchange rates and currency metadata
//!
//! Rates are a fixed lookup table, one row per source currency. The table
//! is not symmetric: converting A to B and back drifts slightly.

use serde::Serialize;

use crate::error::{FintrackError, FintrackResult};

/// Display metadata for a supported currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

const fn info(code: &'static str, name: &'static str, symbol: &'static str) -> CurrencyInfo {
    CurrencyInfo { code, name, symbol }
}

/// Supported currencies, in picker order
pub const CURRENCIES: [CurrencyInfo; 10] = [
    info("INR", "Indian Rupee", "₹"),
    info("USD", "US Dollar", "$"),
    info("EUR", "Euro", "€"),
    info("GBP", "British Pound", "£"),
    info("JPY", "Japanese Yen", "¥"),
    info("CAD", "Canadian Dollar", "C$"),
    info("AUD", "Australian Dollar", "A$"),
    info("CHF", "Swiss Franc", "CHF"),
    info("CNY", "Chinese Yuan", "¥"),
    info("BRL", "Brazilian Real", "R$"),
];

type RateRow = (&'static str, [(&'static str, f64); 9]);

const RATES: [RateRow; 10] = [
    ("INR", [("USD", 0.012), ("EUR", 0.011), ("GBP", 0.0095), ("JPY", 1.81), ("CAD", 0.016), ("AUD", 0.018), ("CHF", 0.011), ("CNY", 0.087), ("BRL", 0.061)]),
    ("USD", [("INR", 83.12), ("EUR", 0.92), ("GBP", 0.79), ("JPY", 150.2), ("CAD", 1.35), ("AUD", 1.52), ("CHF", 0.89), ("CNY", 7.24), ("BRL", 5.05)]),
    ("EUR", [("INR", 90.45), ("USD", 1.09), ("GBP", 0.86), ("JPY", 163.5), ("CAD", 1.47), ("AUD", 1.65), ("CHF", 0.97), ("CNY", 7.88), ("BRL", 5.5)]),
    ("GBP", [("INR", 105.2), ("USD", 1.27), ("EUR", 1.16), ("JPY", 190.1), ("CAD", 1.71), ("AUD", 1.92), ("CHF", 1.13), ("CNY", 9.17), ("BRL", 6.39)]),
    ("JPY", [("INR", 0.55), ("USD", 0.0067), ("EUR", 0.0061), ("GBP", 0.0053), ("CAD", 0.009), ("AUD", 0.01), ("CHF", 0.0059), ("CNY", 0.048), ("BRL", 0.034)]),
    ("CAD", [("INR", 61.57), ("USD", 0.74), ("EUR", 0.68), ("GBP", 0.58), ("JPY", 111.3), ("AUD", 1.13), ("CHF", 0.66), ("CNY", 5.36), ("BRL", 3.74)]),
    ("AUD", [("INR", 54.69), ("USD", 0.66), ("EUR", 0.61), ("GBP", 0.52), ("JPY", 98.8), ("CAD", 0.89), ("CHF", 0.59), ("CNY", 4.76), ("BRL", 3.32)]),
    ("CHF", [("INR", 93.39), ("USD", 1.12), ("EUR", 1.03), ("GBP", 0.89), ("JPY", 168.8), ("CAD", 1.52), ("AUD", 1.71), ("CNY", 8.13), ("BRL", 5.67)]),
    ("CNY", [("INR", 11.48), ("USD", 0.14), ("EUR", 0.13), ("GBP", 0.11), ("JPY", 20.75), ("CAD", 0.19), ("AUD", 0.21), ("CHF", 0.12), ("BRL", 0.7)]),
    ("BRL", [("INR", 16.46), ("USD", 0.2), ("EUR", 0.18), ("GBP", 0.16), ("JPY", 29.74), ("CAD", 0.27), ("AUD", 0.3), ("CHF", 0.18), ("CNY", 1.43)]),
];

/// Look up a supported currency by code (case-insensitive)
pub fn currency_info(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

/// Rate for converting one unit of `from` into `to`
///
/// Same-currency pairs of a supported currency have rate 1.
pub fn rate(from: &str, to: &str) -> FintrackResult<f64> {
    let unknown = || FintrackError::UnknownRate {
        from: from.to_string(),
        to: to.to_string(),
    };

    let (source, targets) = RATES
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(from.trim()))
        .ok_or_else(unknown)?;

    if source.eq_ignore_ascii_case(to.trim()) {
        return Ok(1.0);
    }

    targets
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(to.trim()))
        .map(|(_, rate)| *rate)
        .ok_or_else(unknown)
}

/// Convert `amount` from one currency to another
pub fn convert(amount: f64, from: &str, to: &str) -> FintrackResult<f64> {
    Ok(amount * rate(from, to)?)
}
