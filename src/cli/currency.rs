//! Currency CLI commands
//!
//! The store's currency only changes how amounts are labelled; stored amounts
//! are never converted.

use clap::Subcommand;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::display::format_currency;
use crate::error::FintrackResult;
use crate::finance::{convert, currency_info, rate, CURRENCIES};
use crate::storage::StateStore;
use crate::store::{Action, Store};

/// Currency subcommands
#[derive(Subcommand)]
pub enum CurrencyCommands {
    /// Change the display currency
    Set {
        /// Currency code (e.g., USD)
        code: String,
    },
    /// Show the display currency
    Show,
    /// Convert an amount using the built-in rate table
    Convert {
        amount: f64,
        /// Source currency, defaults to the display currency
        #[arg(short, long)]
        from: Option<String>,
        /// Target currency, defaults to USD (EUR when the source is USD)
        #[arg(short, long)]
        to: Option<String>,
    },
    /// List supported currencies and their rates
    Rates {
        /// Base currency, defaults to the display currency
        #[arg(short, long)]
        base: Option<String>,
    },
}

#[derive(Tabled)]
struct RateRow {
    #[tabled(rename = "Code")]
    code: &'static str,
    #[tabled(rename = "Currency")]
    name: &'static str,
    #[tabled(rename = "Symbol")]
    symbol: &'static str,
    #[tabled(rename = "Rate")]
    rate: String,
}

/// Handle a currency command
pub fn handle_currency_command<S: StateStore>(
    store: &mut Store<S>,
    settings: &Settings,
    cmd: CurrencyCommands,
) -> FintrackResult<()> {
    match cmd {
        CurrencyCommands::Set { code } => {
            let code = code.trim().to_uppercase();
            if currency_info(&code).is_none() {
                eprintln!(
                    "Warning: {} is not a supported currency; amounts will show the code instead of a symbol",
                    code
                );
            }

            store.dispatch(Action::SetCurrency(code.clone()))?;
            println!("Display currency set to {}", code);
        }

        CurrencyCommands::Show => {
            let code = store.state().currency();
            match currency_info(code) {
                Some(info) => println!("{} - {} ({})", info.symbol, info.name, info.code),
                None => println!("{}", code),
            }
        }

        CurrencyCommands::Convert { amount, from, to } => {
            let from = from
                .unwrap_or_else(|| store.state().currency().to_string())
                .to_uppercase();
            let to = to
                .unwrap_or_else(|| if from == "USD" { "EUR" } else { "USD" }.to_string())
                .to_uppercase();

            let converted = convert(amount, &from, &to)?;
            println!(
                "{} = {}",
                format_currency(amount, &from, settings.show_symbol),
                format_currency(converted, &to, settings.show_symbol)
            );
            println!("1 {} = {} {}", from, rate(&from, &to)?, to);
        }

        CurrencyCommands::Rates { base } => {
            let base = base
                .unwrap_or_else(|| store.state().currency().to_string())
                .to_uppercase();

            let rows = CURRENCIES
                .iter()
                .map(|c| {
                    Ok(RateRow {
                        code: c.code,
                        name: c.name,
                        symbol: c.symbol,
                        rate: rate(&base, c.code)?.to_string(),
                    })
                })
                .collect::<FintrackResult<Vec<_>>>()?;

            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("Rates for 1 {}", base);
            println!("{}", table);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStateStore;

    #[test]
    fn test_set_currency_keeps_amounts() {
        let mut store = Store::open(MemoryStateStore::new(), &Settings::default(), None);
        let amounts: Vec<f64> = store
            .state()
            .transactions
            .iter()
            .map(|t| t.amount.value())
            .collect();

        let cmd = CurrencyCommands::Set { code: "usd".into() };
        handle_currency_command(&mut store, &Settings::default(), cmd).unwrap();

        assert_eq!(store.state().currency(), "USD");
        let after: Vec<f64> = store
            .state()
            .transactions
            .iter()
            .map(|t| t.amount.value())
            .collect();
        assert_eq!(after, amounts);
    }

    #[test]
    fn test_convert_unknown_pair_fails() {
        let mut store = Store::open(MemoryStateStore::new(), &Settings::default(), None);
        let cmd = CurrencyCommands::Convert {
            amount: 10.0,
            from: Some("INR".into()),
            to: Some("XYZ".into()),
        };
        assert!(handle_currency_command(&mut store, &Settings::default(), cmd).is_err());
    }
}
