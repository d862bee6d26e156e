//! Budget CLI commands

use clap::Subcommand;

use super::{parse_month, unchanged_notice};
use crate::config::Settings;
use crate::display::{format_budget_status_table, format_budget_table, AmountStyle};
use crate::error::{FintrackError, FintrackResult};
use crate::models::{available_budget_categories, BudgetInput};
use crate::reports::BudgetOverview;
use crate::storage::StateStore;
use crate::store::{Action, Store};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set a monthly budget for a category
    Add {
        /// Expense category (one budget per category)
        category: String,
        /// Monthly limit
        amount: String,
    },
    /// Change a budget's limit or category
    Edit {
        /// Budget category or ID
        budget: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Remove a budget
    Delete {
        /// Budget category or ID
        budget: String,
    },
    /// List budgets and the categories still unbudgeted
    List,
    /// Spending against each budget for a month
    Status {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command<S: StateStore>(
    store: &mut Store<S>,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FintrackResult<()> {
    let style = AmountStyle::new(store.state(), settings);

    match cmd {
        BudgetCommands::Add { category, amount } => {
            let budget = BudgetInput { category, amount }.into_budget(None)?;
            if store.state().budget_for_category(&budget.category).is_some() {
                return Err(FintrackError::duplicate_budget(&budget.category));
            }

            store.dispatch(Action::AddBudget(budget.clone()))?;
            println!(
                "Created budget: {} {} per month ({})",
                budget.category,
                style.amount(budget.amount.value()),
                budget.id
            );
        }

        BudgetCommands::Edit {
            budget,
            amount,
            category,
        } => {
            let existing = store.state().find_budget(&budget)?.clone();
            let input = BudgetInput {
                category: category.unwrap_or_else(|| existing.category.clone()),
                amount: amount.unwrap_or_else(|| existing.amount.value().to_string()),
            };
            let updated = input.into_budget(Some(existing.id))?;

            if let Some(other) = store.state().budget_for_category(&updated.category) {
                if other.id != existing.id {
                    return Err(FintrackError::duplicate_budget(&updated.category));
                }
            }

            let outcome = store.dispatch(Action::UpdateBudget(updated.clone()))?;
            match unchanged_notice(outcome) {
                Some(notice) => println!("{}", notice),
                None => println!(
                    "Updated budget: {} {} per month",
                    updated.category,
                    style.amount(updated.amount.value())
                ),
            }
        }

        BudgetCommands::Delete { budget } => {
            let existing = store.state().find_budget(&budget)?.clone();
            store.dispatch(Action::DeleteBudget(existing.id))?;
            println!("Deleted budget: {}", existing.category);
        }

        BudgetCommands::List => {
            let state = store.state();
            println!("{}", format_budget_table(&state.budgets, &style));

            let available = available_budget_categories(&state.budgets);
            if !available.is_empty() {
                println!("\nUnbudgeted categories: {}", available.join(", "));
            }
        }

        BudgetCommands::Status { month } => {
            let month = parse_month(month.as_deref())?;
            let overview = BudgetOverview::generate(store.state(), month);

            print!("{}", overview.format_terminal(&style));
            println!();
            println!("{}", format_budget_status_table(&overview.statuses, &style));
        }
    }

    Ok(())
}
