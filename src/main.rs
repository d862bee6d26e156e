use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::audit::AuditLogger;
use fintrack::cli::{
    handle_budget_command, handle_calc_command, handle_currency_command, handle_export_command,
    handle_log_command, handle_report_command, handle_transaction_command, BudgetCommands,
    CalcCommands, CurrencyCommands, ExportCommands, ReportCommands, TransactionCommands,
};
use fintrack::config::{FintrackPaths, Settings};
use fintrack::storage::{FileStateStore, StateStore};
use fintrack::store::{Action, Store};

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker with budgets and financial calculators",
    long_about = "fintrack records income and expenses, tracks monthly budgets per \
                  category, and includes loan EMI, SIP and currency calculators. \
                  Everything runs locally against a single JSON state file."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Display currency and conversions
    #[command(subcommand)]
    Currency(CurrencyCommands),

    /// Loan and SIP calculators
    #[command(subcommand)]
    Calc(CalcCommands),

    /// Financial reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data to JSON or CSV
    #[command(subcommand)]
    Export(ExportCommands),

    /// Replace all data with the sample data set
    Reset {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show recent journal entries
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Launch the interactive dashboard
    #[command(alias = "tui")]
    Dashboard,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Reading the journal and the config needs no store
    match cli.command {
        Some(Commands::Log { count }) => {
            handle_log_command(&paths, count)?;
            return Ok(());
        }
        Some(Commands::Config) => {
            show_config(&paths, &settings)?;
            return Ok(());
        }
        None => {
            println!("fintrack - personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack dashboard' to launch the interactive interface.");
            return Ok(());
        }
        _ => {}
    }

    let mut storage = FileStateStore::new(paths.state_file());
    if !settings.pretty_json {
        storage = storage.compact();
    }
    let journal = settings
        .audit_enabled
        .then(|| AuditLogger::new(paths.audit_log()));

    let mut store = Store::open(storage, &settings, journal);
    print_warnings(&mut store);

    let result = run_command(cli.command, &mut store, &settings, &paths);
    print_warnings(&mut store);
    result
}

fn run_command<S: StateStore>(
    command: Option<Commands>,
    store: &mut Store<S>,
    settings: &Settings,
    paths: &FintrackPaths,
) -> Result<()> {
    match command {
        Some(Commands::Transaction(cmd)) => handle_transaction_command(store, settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(store, settings, cmd)?,
        Some(Commands::Currency(cmd)) => handle_currency_command(store, settings, cmd)?,
        Some(Commands::Calc(cmd)) => handle_calc_command(store, settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(store, settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(store, settings, paths, cmd)?,
        Some(Commands::Reset { force }) => {
            if !force {
                println!(
                    "This replaces all {} transactions and {} budgets with sample data.",
                    store.state().transactions.len(),
                    store.state().budgets.len()
                );
                println!("Use --force to confirm.");
                return Ok(());
            }
            store.dispatch(Action::ResetData)?;
            println!("Data reset to the sample data set.");
        }
        Some(Commands::Dashboard) => fintrack::tui::run_tui(store, settings)?,
        Some(Commands::Log { .. }) | Some(Commands::Config) | None => {}
    }

    Ok(())
}

fn show_config(paths: &FintrackPaths, settings: &Settings) -> Result<()> {
    if !paths.settings_file().exists() {
        settings.save(paths)?;
    }

    println!("fintrack Configuration");
    println!("======================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("State file:       {}", paths.state_file().display());
    println!("Journal:          {}", paths.audit_log().display());
    println!("Export directory: {}", paths.export_dir().display());
    println!();
    println!("Settings:");
    println!("  Default currency: {}", settings.default_currency);
    println!("  Show symbol:      {}", settings.show_symbol);
    println!("  Date format:      {}", settings.date_format);
    println!("  Journal enabled:  {}", settings.audit_enabled);
    println!("  Pretty JSON:      {}", settings.pretty_json);
    Ok(())
}

fn print_warnings<S: StateStore>(store: &mut Store<S>) {
    for warning in store.take_warnings() {
        eprintln!("Warning: {}", warning);
    }
}
