//! Cash flow chart CLI command

use chrono::NaiveDate;
use clap::Args;

use super::Workspace;
use crate::display::format_cash_flow;
use crate::error::DollaResult;
use crate::reports::{CashFlowReport, ChartRange};

/// Chart arguments
#[derive(Args, Debug)]
pub struct ChartArgs {
    /// Window to show: 90d, 30d or 7d (defaults to the configured chart_range)
    #[arg(short, long)]
    pub range: Option<ChartRange>,

    /// Last day of the window (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

/// Handle the chart command
pub fn handle_chart_command(workspace: &Workspace, args: ChartArgs) -> DollaResult<()> {
    let settings = &workspace.settings;
    let range = args.range.unwrap_or(settings.chart_range);
    let reference_date = args
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut skipped = workspace.diagnostics();

    let report = CashFlowReport::generate(
        &workspace.snapshot.incomes,
        &workspace.snapshot.expenses,
        range,
        reference_date,
    )
    .drain_into(&mut skipped);

    print!("{}", format_cash_flow(&report, settings.currency));

    workspace.report_skipped(skipped);
    Ok(())
}
