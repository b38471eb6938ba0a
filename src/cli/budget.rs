//! Budget CLI commands
//!
//! Implements CLI commands for budget progress: the month summary, the
//! per-category status table and alerts.

use clap::Subcommand;

use super::{month_or_current, Workspace};
use crate::display::{format_alerts, format_budget_table};
use crate::error::DollaResult;
use crate::models::Month;
use crate::reports::{month_budgets, BudgetAlerts};

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Show totals across all budgets of a month
    Summary {
        /// Budget month (e.g., "2025-01" for January 2025)
        #[arg(short, long)]
        month: Option<Month>,
    },

    /// Show spending progress per budget
    #[command(alias = "progress")]
    Status {
        /// Budget month (e.g., "2025-01" for January 2025)
        #[arg(short, long)]
        month: Option<Month>,
    },

    /// Show overspent and nearly exhausted budgets
    Alerts {
        /// Budget month (e.g., "2025-01" for January 2025)
        #[arg(short, long)]
        month: Option<Month>,
    },
}

/// Handle budget commands
pub fn handle_budget_command(workspace: &Workspace, cmd: BudgetCommands) -> DollaResult<()> {
    let (month, view) = match cmd {
        BudgetCommands::Summary { month } => (month, BudgetView::Summary),
        BudgetCommands::Status { month } => (month, BudgetView::Status),
        BudgetCommands::Alerts { month } => (month, BudgetView::Alerts),
    };
    let month = month_or_current(month);
    let snapshot = &workspace.snapshot;
    let settings = &workspace.settings;
    let mut skipped = workspace.diagnostics();

    let month_view = month_budgets(
        &snapshot.budgets,
        &snapshot.expenses,
        month,
        &settings.thresholds,
    )?
    .drain_into(&mut skipped);

    match view {
        BudgetView::Summary => {
            print!("{}", month_view.summary.format_terminal(settings.currency, month));
        }
        BudgetView::Status => {
            if month_view.budgets.is_empty() {
                println!("No budgets set for {}.", month);
            } else {
                println!("Budgets for {}", month);
                println!("{}", format_budget_table(&month_view.budgets, settings.currency));
            }
        }
        BudgetView::Alerts => {
            let alerts = BudgetAlerts::from_progress(&month_view.budgets, &settings.thresholds);
            if alerts.is_empty() {
                println!("No budget alerts for {}.", month);
            } else {
                println!("{}", format_alerts(&alerts, settings.currency));
            }
        }
    }

    workspace.report_skipped(skipped);
    Ok(())
}

enum BudgetView {
    Summary,
    Status,
    Alerts,
}
