//! Recent transactions CLI command

use clap::Args;

use super::Workspace;
use crate::display::format_feed_table;
use crate::error::DollaResult;
use crate::services::merge_recent;

/// Feed arguments
#[derive(Args, Debug)]
pub struct FeedArgs {
    /// Number of entries to show (defaults to the configured recent_limit)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,
}

/// Handle the feed command
pub fn handle_feed_command(workspace: &Workspace, args: FeedArgs) -> DollaResult<()> {
    let settings = &workspace.settings;
    let limit = args.limit.unwrap_or(settings.recent_limit);
    let mut skipped = workspace.diagnostics();

    let feed = merge_recent(
        &workspace.snapshot.incomes,
        &workspace.snapshot.expenses,
        limit,
    )
    .drain_into(&mut skipped);

    println!(
        "{}",
        format_feed_table(&feed, settings.currency, &settings.date_format)
    );

    workspace.report_skipped(skipped);
    Ok(())
}
