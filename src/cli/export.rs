//! CLI commands for data export
//!
//! Provides commands for exporting records and reports as CSV, JSON or YAML.
//! Output goes to stdout unless a file is given.

use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{month_or_current, Workspace};
use crate::error::{DollaError, DollaResult};
use crate::export::{
    export_accounts_csv, export_budgets_csv, export_dashboard_json, export_dashboard_yaml,
    export_expenses_csv, export_feed_csv, export_incomes_csv, DashboardExport,
};
use crate::models::Month;
use crate::reports::month_budgets;
use crate::services::merge_recent;

/// Report format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export incomes to CSV
    Incomes {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export expenses to CSV
    Expenses {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export accounts to CSV
    Accounts {
        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export budget progress for a month to CSV
    Budgets {
        /// Budget month (e.g., "2025-01")
        #[arg(short, long)]
        month: Option<Month>,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export the recent transactions feed to CSV
    Feed {
        /// Number of entries (defaults to the configured recent_limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export every dashboard view for a month
    Report {
        /// Report month (e.g., "2025-01")
        #[arg(short, long)]
        month: Option<Month>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ReportFormat,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(workspace: &Workspace, cmd: ExportCommands) -> DollaResult<()> {
    let snapshot = &workspace.snapshot;
    let settings = &workspace.settings;
    let mut skipped = workspace.diagnostics();

    let output = match cmd {
        ExportCommands::Incomes { output } => {
            write_to(output.as_deref(), |w| export_incomes_csv(&snapshot.incomes, w))?;
            output
        }
        ExportCommands::Expenses { output } => {
            write_to(output.as_deref(), |w| export_expenses_csv(&snapshot.expenses, w))?;
            output
        }
        ExportCommands::Accounts { output } => {
            write_to(output.as_deref(), |w| export_accounts_csv(&snapshot.accounts, w))?;
            output
        }
        ExportCommands::Budgets { month, output } => {
            let month_view = month_budgets(
                &snapshot.budgets,
                &snapshot.expenses,
                month_or_current(month),
                &settings.thresholds,
            )?
            .drain_into(&mut skipped);
            write_to(output.as_deref(), |w| export_budgets_csv(&month_view.budgets, w))?;
            output
        }
        ExportCommands::Feed { limit, output } => {
            let feed = merge_recent(
                &snapshot.incomes,
                &snapshot.expenses,
                limit.unwrap_or(settings.recent_limit),
            )
            .drain_into(&mut skipped);
            write_to(output.as_deref(), |w| export_feed_csv(&feed, w))?;
            output
        }
        ExportCommands::Report {
            month,
            format,
            output,
        } => {
            let export =
                DashboardExport::build(snapshot, &skipped, month_or_current(month), settings)?;
            skipped = export.skipped.clone();
            write_to(output.as_deref(), |mut w| match format {
                ReportFormat::Json => export_dashboard_json(&export, &mut w),
                ReportFormat::Yaml => export_dashboard_yaml(&export, &mut w),
            })?;
            output
        }
    };

    if let Some(path) = output {
        eprintln!("Exported to: {}", path.display());
    }
    workspace.report_skipped(skipped);
    Ok(())
}

/// Run `write` against the output file, or stdout when none is given
fn write_to<F>(output: Option<&Path>, write: F) -> DollaResult<()>
where
    F: FnOnce(&mut dyn Write) -> DollaResult<()>,
{
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                DollaError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write(&mut handle)?;
            handle.flush()?;
        }
    }
    Ok(())
}
