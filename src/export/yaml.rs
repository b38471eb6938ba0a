//! YAML export
//!
//! Same document as the JSON export, for people reading it by hand.

use std::io::Write;

use crate::error::DollaResult;
use crate::export::json::DashboardExport;

/// Write the export as YAML with a short header
pub fn export_dashboard_yaml<W: Write>(export: &DashboardExport, writer: &mut W) -> DollaResult<()> {
    writeln!(writer, "# Dolla dashboard export for {}", export.month)?;
    writeln!(writer, "# Generated: {}", export.generated_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    if !export.skipped.is_empty() {
        writeln!(
            writer,
            "# {} record(s) were skipped; see 'skipped' below.",
            export.skipped.len()
        )?;
    }
    writeln!(writer)?;

    serde_yaml::to_writer(writer, export)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::diagnostics::Diagnostics;
    use crate::models::{Category, Expense, Month};
    use crate::snapshot::Snapshot;

    #[test]
    fn test_yaml_export() {
        let snapshot = Snapshot {
            expenses: vec![
                Expense::new("e-1", "2025-03-02", 40.0, Category::Transport, "Bolt"),
                Expense::new("e-2", "later", 5.0, Category::Transport, "Bolt"),
            ],
            ..Default::default()
        };
        let export = DashboardExport::build(
            &snapshot,
            &Diagnostics::new(),
            Month::new(2025, 3).unwrap(),
            &Settings::default(),
        )
        .unwrap();

        let mut output = Vec::new();
        export_dashboard_yaml(&export, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Dolla dashboard export for 2025-03"));
        assert!(yaml.contains("1 record(s) were skipped"));
        assert!(yaml.contains("totalExpenses: 40.0"));
        assert!(yaml.contains("schemaVersion:"));
    }
}
