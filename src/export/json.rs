//! JSON export
//!
//! Bundles every dashboard view model for one month into a single document
//! with schema versioning.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::config::Settings;
use crate::diagnostics::Diagnostics;
use crate::error::DollaResult;
use crate::models::Month;
use crate::reports::{month_budgets, AccountsSummary, BudgetAlerts, BudgetSummary, DashboardTotals};
use crate::services::{merge_recent, BudgetProgress, RecentTransaction};
use crate::snapshot::Snapshot;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// All dashboard view models for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub generated_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub month: Month,
    pub totals: DashboardTotals,
    pub budget_summary: BudgetSummary,
    pub budgets: Vec<BudgetProgress>,
    pub alerts: BudgetAlerts,
    pub recent_transactions: Vec<RecentTransaction>,
    pub accounts_summary: AccountsSummary,

    /// Every record left out of any of the figures above
    pub skipped: Diagnostics,
}

impl DashboardExport {
    /// Compute every view model from a snapshot
    ///
    /// `intake` holds problems found while reading the snapshot; they are
    /// reported alongside the ones found here. Fails only on an invalid
    /// budget.
    pub fn build(
        snapshot: &Snapshot,
        intake: &Diagnostics,
        month: Month,
        settings: &Settings,
    ) -> DollaResult<Self> {
        let mut skipped = intake.clone();

        let totals = DashboardTotals::generate(&snapshot.incomes, &snapshot.expenses, month)
            .drain_into(&mut skipped);
        let month_view = month_budgets(
            &snapshot.budgets,
            &snapshot.expenses,
            month,
            &settings.thresholds,
        )?
        .drain_into(&mut skipped);
        let alerts = BudgetAlerts::from_progress(&month_view.budgets, &settings.thresholds);
        let recent_transactions =
            merge_recent(&snapshot.incomes, &snapshot.expenses, settings.recent_limit)
                .drain_into(&mut skipped);
        let accounts_summary = AccountsSummary::generate(&snapshot.accounts);

        skipped.dedup();

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            month,
            totals,
            budget_summary: month_view.summary,
            budgets: month_view.budgets,
            alerts,
            recent_transactions,
            accounts_summary,
            skipped,
        })
    }
}

/// Write the export as pretty-printed JSON
pub fn export_dashboard_json<W: Write>(export: &DashboardExport, writer: &mut W) -> DollaResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)?;
    writeln!(writer)?;
    Ok(())
}
