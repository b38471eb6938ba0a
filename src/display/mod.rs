//! Display formatting for terminal output
//!
//! Tables and summaries for the command-line front end.

pub mod account;
pub mod budget;
pub mod chart;
pub mod report;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use budget::{format_alerts, format_budget_table};
pub use chart::format_cash_flow;
pub use transaction::format_feed_table;

use crate::diagnostics::Diagnostics;

/// One-line notice about skipped records, plus details when `verbose`
pub fn format_skipped(diagnostics: &Diagnostics, verbose: bool) -> Option<String> {
    if diagnostics.is_empty() {
        return None;
    }

    let mut output = format!(
        "{} record(s) skipped due to data problems",
        diagnostics.len()
    );
    if verbose {
        for skipped in diagnostics {
            output.push_str(&format!("\n  - {}", skipped));
        }
    } else {
        output.push_str(" (use --verbose for details)");
    }
    Some(output)
}
