//! Budget summary for a month
//!
//! Rolls every budget of a month up into one set of totals.

use serde::Serialize;

use crate::diagnostics::Checked;
use crate::error::DollaResult;
use crate::models::{Budget, Currency, Expense, Money, Month};
use crate::services::{recalculate_month_with, AlertThresholds, BudgetProgress};

/// Totals across all budgets of a month
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_budget: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
    pub overall_percentage_used: f64,
    pub categories_overspent: usize,
    /// Budgets that are not overspent
    pub categories_on_track: usize,
    pub total_categories: usize,
}

impl BudgetSummary {
    /// Summarize already computed progress
    pub fn from_progress(progress: &[BudgetProgress]) -> Self {
        let total_budget: Money = progress.iter().map(|p| p.budget.budget_amount).sum();
        let total_spent: Money = progress.iter().map(|p| p.status.spent_amount).sum();
        let categories_overspent = progress.iter().filter(|p| p.status.is_overspent).count();

        let overall_percentage_used = if total_budget.is_positive() {
            (total_spent.cents() as f64 * 100.0) / total_budget.cents() as f64
        } else {
            0.0
        };

        Self {
            total_budget,
            total_spent,
            total_remaining: total_budget - total_spent,
            overall_percentage_used,
            categories_overspent,
            categories_on_track: progress.len() - categories_overspent,
            total_categories: progress.len(),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency: Currency, month: Month) -> String {
        let mut output = String::new();
        output.push_str(&format!("Budget Summary - {}\n", month));
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "Total Budget:     {:>24}\n",
            self.total_budget.format_with_currency(currency)
        ));
        output.push_str(&format!(
            "Total Spent:      {:>24}\n",
            self.total_spent.format_with_currency(currency)
        ));
        output.push_str(&format!(
            "Total Remaining:  {:>24}\n",
            self.total_remaining.format_with_currency(currency)
        ));
        output.push_str(&format!(
            "Used:             {:>23.1}%\n",
            self.overall_percentage_used
        ));
        output.push_str(&format!(
            "Categories:       {} total, {} on track, {} overspent\n",
            self.total_categories, self.categories_on_track, self.categories_overspent
        ));
        output
    }
}

/// Progress for every budget of `month` together with its summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBudgets {
    pub month: Month,
    pub summary: BudgetSummary,
    pub budgets: Vec<BudgetProgress>,
}

/// Recompute and summarize the budgets of `month`
///
/// Fails if any budget of the month is invalid.
pub fn summarize_month(
    budgets: &[Budget],
    expenses: &[Expense],
    month: Month,
) -> DollaResult<Checked<BudgetSummary>> {
    Ok(month_budgets(budgets, expenses, month, &AlertThresholds::default())?.map(|m| m.summary))
}

/// Like [`summarize_month`], keeping the per-budget progress
pub fn month_budgets(
    budgets: &[Budget],
    expenses: &[Expense],
    month: Month,
    thresholds: &AlertThresholds,
) -> DollaResult<Checked<MonthBudgets>> {
    let progress = recalculate_month_with(budgets, expenses, month, thresholds)?;
    Ok(progress.map(|budgets| MonthBudgets {
        month,
        summary: BudgetSummary::from_progress(&budgets),
        budgets,
    }))
}
