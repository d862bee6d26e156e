//! Report CLI commands

use clap::Subcommand;

use super::parse_month;
use crate::config::Settings;
use crate::display::AmountStyle;
use crate::error::FintrackResult;
use crate::finance::holdings::{HOLDINGS_CURRENCY, SAMPLE_ACCOUNTS, SAMPLE_INVESTMENTS};
use crate::reports::{
    AccountSummary, ExpenseBreakdown, FinancialSummary, InvestmentSummary, MonthComparison,
    SpendingTrends, DEFAULT_TREND_MONTHS,
};
use crate::storage::StateStore;
use crate::store::Store;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Total income, expenses and balance
    Summary,
    /// Expenses per category, largest first
    Categories {
        /// Month (YYYY-MM); all time when omitted
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Monthly spending per category
    Trends {
        /// Number of months ending with the current one
        #[arg(short = 'n', long, default_value_t = DEFAULT_TREND_MONTHS)]
        months: usize,
    },
    /// This month against the previous month
    Compare {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Net worth and balances per account type
    Accounts,
    /// Portfolio totals and weighted average return
    Investments,
}

/// Handle a report command
pub fn handle_report_command<S: StateStore>(
    store: &Store<S>,
    settings: &Settings,
    cmd: ReportCommands,
) -> FintrackResult<()> {
    let state = store.state();
    let style = AmountStyle::new(state, settings);

    let output = match cmd {
        ReportCommands::Summary => FinancialSummary::generate(state).format_terminal(&style),
        ReportCommands::Categories { month } => {
            let month = month.as_deref().map(|m| parse_month(Some(m))).transpose()?;
            ExpenseBreakdown::generate(state, month).format_terminal(&style)
        }
        ReportCommands::Trends { months } => {
            SpendingTrends::generate(state, parse_month(None)?, months).format_terminal(&style)
        }
        ReportCommands::Compare { month } => {
            MonthComparison::generate(state, parse_month(month.as_deref())?).format_terminal(&style)
        }
        ReportCommands::Accounts => {
            AccountSummary::generate(&SAMPLE_ACCOUNTS, HOLDINGS_CURRENCY).format_terminal(&style)
        }
        ReportCommands::Investments => {
            InvestmentSummary::generate(&SAMPLE_INVESTMENTS, HOLDINGS_CURRENCY)
                .format_terminal(&style)
        }
    };

    print!("{}", output);
    Ok(())
}
