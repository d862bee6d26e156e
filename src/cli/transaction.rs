//! Transaction CLI commands

use clap::Subcommand;

use super::{parse_date, parse_month, unchanged_notice};
use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_table, AmountStyle};
use crate::error::FintrackResult;
use crate::finance::TransactionFilter;
use crate::models::category::canonical_category;
use crate::models::{categories_for, TransactionInput, TransactionType};
use crate::storage::StateStore;
use crate::store::{Action, Store};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Short description
        title: String,
        /// Amount (e.g., "1200", "1,250.50"); never negative
        amount: String,
        /// income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: TransactionType,
        /// Category (e.g., Food, Salary)
        #[arg(short, long, default_value = "Other")]
        category: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Only income or only expenses
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (full or short)
        id: String,
    },
    /// Edit a transaction; omitted fields keep their value
    Edit {
        /// Transaction ID (full or short)
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionType>,
        #[arg(short, long)]
        category: Option<String>,
        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (full or short)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List suggested categories
    Categories,
}

/// Handle a transaction command
pub fn handle_transaction_command<S: StateStore>(
    store: &mut Store<S>,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FintrackResult<()> {
    let style = AmountStyle::new(store.state(), settings);

    match cmd {
        TransactionCommands::Add {
            title,
            amount,
            kind,
            category,
            date,
        } => {
            let input = TransactionInput {
                title,
                amount,
                kind,
                category,
                date: parse_date(date.as_deref())?,
            };
            let txn = input.into_transaction(None)?;
            store.dispatch(Action::AddTransaction(txn.clone()))?;

            println!("Created transaction:");
            print!("{}", format_transaction_details(&txn, &style));
        }

        TransactionCommands::List {
            kind,
            category,
            month,
            limit,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(kind) = kind {
                filter = filter.kind(kind);
            }
            if let Some(category) = category {
                filter = filter.category(vocabulary_spelling(&category));
            }
            if let Some(month) = month {
                filter = filter.month(parse_month(Some(&month))?);
            }

            let matching: Vec<_> = store
                .state()
                .transactions_by_date()
                .into_iter()
                .filter(|t| filter.matches(t))
                .collect();
            let shown = &matching[..limit.min(matching.len())];

            println!("{}", format_transaction_table(shown, &style));
            println!("\nShowing {} of {} transactions", shown.len(), matching.len());
        }

        TransactionCommands::Show { id } => {
            let txn = store.state().find_transaction(&id)?;
            print!("{}", format_transaction_details(txn, &style));
        }

        TransactionCommands::Edit {
            id,
            title,
            amount,
            kind,
            category,
            date,
        } => {
            let existing = store.state().find_transaction(&id)?.clone();

            let input = TransactionInput {
                title: title.unwrap_or_else(|| existing.title.clone()),
                amount: amount.unwrap_or_else(|| existing.amount.value().to_string()),
                kind: kind.unwrap_or(existing.kind),
                category: category.unwrap_or_else(|| existing.category.clone()),
                date: match date {
                    Some(d) => parse_date(Some(&d))?,
                    None => existing.date.date_naive(),
                },
            };
            let mut updated = input.into_transaction(Some(existing.id))?;
            if updated.date.date_naive() == existing.date.date_naive() {
                // Keep the original time of day when the date is unchanged
                updated.date = existing.date;
            }

            let outcome = store.dispatch(Action::UpdateTransaction(updated.clone()))?;
            match unchanged_notice(outcome) {
                Some(notice) => println!("{}", notice),
                None => {
                    println!("Updated transaction:");
                    print!("{}", format_transaction_details(&updated, &style));
                }
            }
        }

        TransactionCommands::Delete { id, force } => {
            let txn = store.state().find_transaction(&id)?.clone();

            if !force {
                println!("About to delete transaction:");
                print!("{}", format_transaction_details(&txn, &style));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            store.dispatch(Action::DeleteTransaction(txn.id))?;
            println!("Deleted transaction: {} ({})", txn.id, txn.title);
        }

        TransactionCommands::Categories => {
            for kind in [TransactionType::Expense, TransactionType::Income] {
                println!("{}: {}", kind, categories_for(kind).join(", "));
            }
        }
    }

    Ok(())
}

/// Canonical spelling of a category typed in any case, checking both vocabularies
fn vocabulary_spelling(name: &str) -> String {
    let trimmed = name.trim();
    [TransactionType::Expense, TransactionType::Income]
        .into_iter()
        .map(|kind| canonical_category(kind, trimmed))
        .find(|canonical| canonical != trimmed)
        .unwrap_or_else(|| trimmed.to_string())
}
