//! Currency and date formatting
//!
//! Amounts are shown with comma digit grouping and exactly two fraction
//! digits, prefixed by the currency symbol unless symbols are turned off.

use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::finance::currency_info;
use crate::store::State;

/// Format `amount` for display in `currency`
///
/// `format_currency(1234.5, "INR", true)` gives `₹1,234.50`; with
/// `show_symbol = false` it gives `1,234.50`. Unknown codes are shown as a
/// prefix: `XYZ 1,234.50`.
pub fn format_currency(amount: f64, currency: &str, show_symbol: bool) -> String {
    let sign = if amount < 0.0 && format!("{:.2}", amount.abs()) != "0.00" {
        "-"
    } else {
        ""
    };
    let grouped = group_digits(amount.abs());

    if !show_symbol {
        return format!("{}{}", sign, grouped);
    }

    match currency_info(currency) {
        Some(info) => format!("{}{}{}", sign, info.symbol, grouped),
        None => format!("{}{} {}", sign, currency.trim().to_uppercase(), grouped),
    }
}

/// Format a timestamp with a strftime pattern such as `%b %-d, %Y`
pub fn format_date(date: &DateTime<Utc>, pattern: &str) -> String {
    date.format(pattern).to_string()
}

fn group_digits(amount: f64) -> String {
    let fixed = format!("{:.2}", amount);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}.{}", grouped, frac_part)
}

/// Display preferences resolved from the store and user settings
#[derive(Debug, Clone, PartialEq)]
pub struct AmountStyle {
    pub currency: String,
    pub show_symbol: bool,
    pub date_format: String,
}

impl AmountStyle {
    pub fn new(state: &State, settings: &Settings) -> Self {
        Self {
            currency: state.currency().to_string(),
            show_symbol: settings.show_symbol,
            date_format: settings.date_format.clone(),
        }
    }

    pub fn amount(&self, value: f64) -> String {
        format_currency(value, &self.currency, self.show_symbol)
    }

    pub fn date(&self, date: &DateTime<Utc>) -> String {
        format_date(date, &self.date_format)
    }
}

impl Default for AmountStyle {
    fn default() -> Self {
        Self::new(&State::default(), &Settings::default())
    }
}
