//! Cash flow chart formatting
//!
//! Terminal stand-in for the area chart: one row per day with activity and
//! a bar scaled to the busiest day.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::format_bar;
use crate::models::{Currency, Money};
use crate::reports::CashFlowReport;

#[derive(Tabled)]
struct ChartRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "")]
    income_bar: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "")]
    expense_bar: String,
}

const BAR_WIDTH: usize = 16;

/// Format the chart, skipping days with no activity
pub fn format_cash_flow(report: &CashFlowReport, currency: Currency) -> String {
    let mut output = format!(
        "Cash flow, last {} ({} to {})\n",
        report.range, report.start_date, report.end_date
    );

    let active: Vec<_> = report
        .points
        .iter()
        .filter(|p| !p.income.is_zero() || !p.expenses.is_zero())
        .collect();

    if active.is_empty() {
        output.push_str("No activity in this range.\n");
    } else {
        let peak = peak_day(report).to_decimal();

        let rows = active.iter().map(|p| ChartRow {
            date: p.period.to_string(),
            income: p.income.format_with_currency(currency),
            income_bar: format_bar(p.income.to_decimal(), peak, BAR_WIDTH),
            expenses: p.expenses.format_with_currency(currency),
            expense_bar: format_bar(p.expenses.to_decimal(), peak, BAR_WIDTH),
        });
        output.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        output.push('\n');
    }

    output.push_str(&format!(
        "Income {}  Expenses {}  Net {}\n",
        report.total_income.format_with_currency(currency),
        report.total_expenses.format_with_currency(currency),
        report.net().format_with_currency(currency)
    ));
    output
}

/// Largest single-day amount on either side
pub fn peak_day(report: &CashFlowReport) -> Money {
    report
        .points
        .iter()
        .map(|p| p.income.max(p.expenses))
        .max()
        .unwrap_or_default()
}
