use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use dolla::cli::{
    handle_accounts_command, handle_budget_command, handle_chart_command, handle_config_command,
    handle_dashboard_command, handle_export_command, handle_feed_command, Workspace,
};
use dolla::config::{DollaPaths, Settings};
use dolla::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "dolla",
    version,
    about = "Personal finance dashboard in the terminal",
    long_about = "Dolla reads snapshots exported from the finance backend (incomes, \
                  expenses, budgets and accounts) and shows the dashboard views: \
                  totals with month-over-month trends, budget progress and alerts, \
                  recent transactions, account balances and cash flow."
)]
struct Cli {
    /// Snapshot JSON file to read (repeat to merge several pages)
    #[arg(short, long = "snapshot", global = true, value_name = "FILE")]
    snapshots: Vec<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true, env = "DOLLA_CONFIG_DIR", value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// List every skipped record and log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show totals, budget alerts and recent transactions
    #[command(alias = "dash")]
    Dashboard(dolla::cli::DashboardArgs),

    /// Budget progress commands
    #[command(subcommand)]
    Budget(dolla::cli::BudgetCommands),

    /// Show the latest incomes and expenses
    #[command(alias = "recent")]
    Feed(dolla::cli::FeedArgs),

    /// Show daily cash flow over a window
    Chart(dolla::cli::ChartArgs),

    /// Show account balances
    #[command(alias = "account")]
    Accounts(dolla::cli::AccountsArgs),

    /// Export records and reports
    #[command(subcommand)]
    Export(dolla::cli::ExportCommands),

    /// Show or change settings
    #[command(subcommand)]
    Config(dolla::cli::ConfigCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = DollaPaths::resolve(cli.config_dir.as_deref())?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Config(cmd) => handle_config_command(&paths, settings, cmd)?,
        command => {
            let workspace = Workspace::load(&cli.snapshots, settings, cli.verbose)?;
            run(&workspace, command)?;
        }
    }

    Ok(())
}

fn run(workspace: &Workspace, command: Commands) -> dolla::DollaResult<()> {
    match command {
        Commands::Dashboard(args) => handle_dashboard_command(workspace, args),
        Commands::Budget(cmd) => handle_budget_command(workspace, cmd),
        Commands::Feed(args) => handle_feed_command(workspace, args),
        Commands::Chart(args) => handle_chart_command(workspace, args),
        Commands::Accounts(args) => handle_accounts_command(workspace, args),
        Commands::Export(cmd) => handle_export_command(workspace, cmd),
        // Needs no snapshot; dispatched in main
        Commands::Config(_) => Ok(()),
    }
}
