//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the aggregation engine.

pub mod account;
pub mod budget;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod feed;

pub use account::{handle_accounts_command, AccountsArgs};
pub use budget::{handle_budget_command, BudgetCommands};
pub use chart::{handle_chart_command, ChartArgs};
pub use config::{handle_config_command, ConfigCommands};
pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use export::{handle_export_command, ExportCommands};
pub use feed::{handle_feed_command, FeedArgs};

use std::path::PathBuf;

use crate::config::Settings;
use crate::diagnostics::Diagnostics;
use crate::display::format_skipped;
use crate::error::{DollaError, DollaResult};
use crate::models::Month;
use crate::snapshot::Snapshot;

/// Everything a data command needs: the loaded snapshot and user settings
#[derive(Debug)]
pub struct Workspace {
    pub snapshot: Snapshot,
    /// Problems found while reading the snapshot files
    pub intake: Diagnostics,
    pub settings: Settings,
    pub verbose: bool,
}

impl Workspace {
    /// Load and merge every snapshot file
    pub fn load(snapshot_files: &[PathBuf], settings: Settings, verbose: bool) -> DollaResult<Self> {
        if snapshot_files.is_empty() {
            return Err(DollaError::Validation(
                "No snapshot given. Pass one or more files with --snapshot".into(),
            ));
        }

        let (snapshot, intake) = Snapshot::load_all(snapshot_files)?.into_parts();
        tracing::debug!(
            files = snapshot_files.len(),
            incomes = snapshot.incomes.len(),
            expenses = snapshot.expenses.len(),
            budgets = snapshot.budgets.len(),
            accounts = snapshot.accounts.len(),
            "loaded snapshot"
        );

        Ok(Self {
            snapshot,
            intake,
            settings,
            verbose,
        })
    }

    /// Start a diagnostics list for one command, seeded with intake problems
    pub fn diagnostics(&self) -> Diagnostics {
        self.intake.clone()
    }

    /// Print the skipped-record notice on stderr
    pub fn report_skipped(&self, mut diagnostics: Diagnostics) {
        diagnostics.dedup();
        if let Some(notice) = format_skipped(&diagnostics, self.verbose) {
            eprintln!("{}", notice);
        }
    }
}

/// The month to report on, defaulting to the current calendar month
pub(crate) fn month_or_current(month: Option<Month>) -> Month {
    month.unwrap_or_else(Month::current)
}
