//! Dashboard CLI command
//!
//! Headline totals, budget alerts and the latest transactions on one screen.

use clap::Args;

use super::{month_or_current, Workspace};
use crate::display::{format_alerts, format_feed_table};
use crate::error::DollaResult;
use crate::models::Month;
use crate::reports::{month_budgets, BudgetAlerts, DashboardTotals};
use crate::services::merge_recent;

/// Dashboard arguments
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Month to compare against the one before it (e.g., "2025-03")
    #[arg(short, long)]
    pub month: Option<Month>,
}

/// Handle the dashboard command
pub fn handle_dashboard_command(workspace: &Workspace, args: DashboardArgs) -> DollaResult<()> {
    let month = month_or_current(args.month);
    let snapshot = &workspace.snapshot;
    let settings = &workspace.settings;
    let mut skipped = workspace.diagnostics();

    let totals = DashboardTotals::generate(&snapshot.incomes, &snapshot.expenses, month)
        .drain_into(&mut skipped);
    let budgets = month_budgets(
        &snapshot.budgets,
        &snapshot.expenses,
        month,
        &settings.thresholds,
    )?
    .drain_into(&mut skipped);
    let alerts = BudgetAlerts::from_progress(&budgets.budgets, &settings.thresholds);
    let feed = merge_recent(&snapshot.incomes, &snapshot.expenses, settings.recent_limit)
        .drain_into(&mut skipped);

    println!("{}", totals.format_terminal(settings.currency, month));
    if !alerts.is_empty() {
        println!("{}", format_alerts(&alerts, settings.currency));
    }
    println!("Recent Transactions");
    println!(
        "{}",
        format_feed_table(&feed, settings.currency, &settings.date_format)
    );

    workspace.report_skipped(skipped);
    Ok(())
}
