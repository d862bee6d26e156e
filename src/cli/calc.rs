//! Financial calculator commands
//!
//! Calculators are pure; they read only the display currency from the store.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_loan, format_sip, AmountStyle};
use crate::error::FintrackResult;
use crate::finance::{amortize, project, yearly_series};
use crate::storage::StateStore;
use crate::store::Store;

/// Calculator subcommands
#[derive(Subcommand)]
pub enum CalcCommands {
    /// Loan EMI and amortization schedule
    Loan {
        /// Loan amount
        #[arg(short, long, default_value = "1000000")]
        principal: f64,
        /// Annual interest rate in percent
        #[arg(short, long, default_value = "8.5")]
        rate: f64,
        /// Loan term in years (1-30)
        #[arg(short, long, default_value = "20")]
        years: u32,
        /// Show every month instead of yearly totals
        #[arg(long)]
        monthly: bool,
    },
    /// Systematic investment plan projection
    Sip {
        /// Monthly investment
        #[arg(short, long, default_value = "5000")]
        amount: f64,
        /// Investment period in years (1-30)
        #[arg(short, long, default_value = "10")]
        years: u32,
        /// Expected annual return in percent
        #[arg(short, long, default_value = "12")]
        rate: f64,
    },
}

/// Handle a calculator command
pub fn handle_calc_command<S: StateStore>(
    store: &Store<S>,
    settings: &Settings,
    cmd: CalcCommands,
) -> FintrackResult<()> {
    let style = AmountStyle::new(store.state(), settings);

    match cmd {
        CalcCommands::Loan {
            principal,
            rate,
            years,
            monthly,
        } => {
            let schedule = amortize(principal, rate, years)?;
            print!("{}", format_loan(&schedule, monthly, &style));
        }
        CalcCommands::Sip {
            amount,
            years,
            rate,
        } => {
            let projection = project(amount, years, rate)?;
            print!(
                "{}",
                format_sip(&projection, &yearly_series(&projection), &style)
            );
        }
    }

    Ok(())
}
