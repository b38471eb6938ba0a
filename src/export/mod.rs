//! Export module for Dolla
//!
//! - CSV: records, budget progress and the recent feed (spreadsheet-compatible)
//! - JSON: the full dashboard bundle for a month (machine-readable)
//! - YAML: the same bundle (human-readable)

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{
    export_accounts_csv, export_budgets_csv, export_expenses_csv, export_feed_csv,
    export_incomes_csv,
};
pub use json::{export_dashboard_json, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_dashboard_yaml;
