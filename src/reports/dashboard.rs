//! Dashboard totals
//!
//! Headline cards: all-time balance, income, expenses and savings, each with
//! its change between the previous and the current calendar month.

use serde::Serialize;

use crate::diagnostics::{Checked, Diagnostics};
use crate::display::report::format_change;
use crate::models::{Currency, Expense, Income, Money, Month};
use crate::services::bucketing::sum_by_month;
use crate::services::money_change;

/// Income, expenses and what is left for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyMetrics {
    pub month: Month,
    pub income: Money,
    pub expenses: Money,
    pub balance: Money,
    pub savings: Money,
}

impl MonthlyMetrics {
    fn new(month: Month, income: Money, expenses: Money) -> Self {
        let balance = income - expenses;
        Self {
            month,
            income,
            expenses,
            balance,
            savings: balance.non_negative(),
        }
    }
}

/// Headline totals with month-over-month change
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTotals {
    pub total_balance: Money,
    pub total_income: Money,
    pub total_expenses: Money,
    /// Balance floored at zero
    pub total_savings: Money,
    pub income_change_percent: f64,
    pub expense_change_percent: f64,
    pub balance_change_percent: f64,
    pub savings_change_percent: f64,
}

impl DashboardTotals {
    /// Compute totals, comparing `current_month` with the month before it
    ///
    /// Every record counts whatever its status; malformed ones are skipped
    /// and reported.
    pub fn generate(incomes: &[Income], expenses: &[Expense], current_month: Month) -> Checked<Self> {
        Self::generate_detailed(incomes, expenses, current_month)
            .map(|(totals, _, _)| totals)
    }

    /// Totals plus the two monthly snapshots they were compared from
    pub fn generate_detailed(
        incomes: &[Income],
        expenses: &[Expense],
        current_month: Month,
    ) -> Checked<(Self, MonthlyMetrics, MonthlyMetrics)> {
        let mut diagnostics = Diagnostics::new();
        let income_by_month = sum_by_month(incomes).drain_into(&mut diagnostics);
        let expense_by_month = sum_by_month(expenses).drain_into(&mut diagnostics);

        let total_income: Money = income_by_month.values().sum();
        let total_expenses: Money = expense_by_month.values().sum();
        let total_balance = total_income - total_expenses;

        let metrics_for = |month: Month| {
            MonthlyMetrics::new(
                month,
                income_by_month.get(&month).copied().unwrap_or_default(),
                expense_by_month.get(&month).copied().unwrap_or_default(),
            )
        };
        let current = metrics_for(current_month);
        let previous = metrics_for(current_month.prev());

        let totals = Self {
            total_balance,
            total_income,
            total_expenses,
            total_savings: total_balance.non_negative(),
            income_change_percent: money_change(current.income, previous.income),
            expense_change_percent: money_change(current.expenses, previous.expenses),
            balance_change_percent: money_change(current.balance, previous.balance),
            savings_change_percent: money_change(current.savings, previous.savings),
        };

        tracing::debug!(
            month = %current_month,
            skipped = diagnostics.len(),
            "generated dashboard totals"
        );

        Checked::new((totals, current, previous), diagnostics)
    }

    /// Format the totals for terminal display
    pub fn format_terminal(&self, currency: Currency, month: Month) -> String {
        let mut output = String::new();

        output.push_str(&format!("Dashboard ({} vs {})\n", month, month.prev()));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        let rows = [
            ("Total Balance", self.total_balance, self.balance_change_percent),
            ("Total Income", self.total_income, self.income_change_percent),
            ("Total Expenses", self.total_expenses, self.expense_change_percent),
            ("Total Savings", self.total_savings, self.savings_change_percent),
        ];
        for (label, amount, change) in rows {
            output.push_str(&format!(
                "{:<16} {:>24} {:>14}\n",
                label,
                amount.format_with_currency(currency),
                format_change(change)
            ));
        }

        output
    }
}
