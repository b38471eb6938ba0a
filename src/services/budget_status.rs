//! Budget status calculation
//!
//! Spending against a budget is always derived from expenses. Nothing here
//! stores or mutates progress; recomputing a month twice gives the same
//! result.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::bucketing::{accumulate, resolve_all};
use crate::diagnostics::{Checked, Diagnostics};
use crate::error::DollaResult;
use crate::models::{Budget, Category, Expense, Money, MonetaryRecord, Month};

/// Spending figures for one budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub spent_amount: Money,
    pub remaining_amount: Money,
    pub percentage_used: f64,
    pub is_overspent: bool,
}

impl BudgetStatus {
    /// Derive status from a ceiling and the amount spent against it
    ///
    /// A zero ceiling reports 0% used and is overspent as soon as anything
    /// is spent.
    ///
    /// # Examples
    /// ```
    /// use dolla::models::Money;
    /// use dolla::services::BudgetStatus;
    ///
    /// let status = BudgetStatus::compute(Money::from_cents(20_000), Money::from_cents(25_000));
    /// assert_eq!(status.remaining_amount.cents(), -5_000);
    /// assert_eq!(status.percentage_used, 125.0);
    /// assert!(status.is_overspent);
    /// ```
    pub fn compute(budget_amount: Money, spent: Money) -> Self {
        let percentage_used = if budget_amount.is_positive() {
            (spent.cents() as f64 * 100.0) / budget_amount.cents() as f64
        } else {
            0.0
        };

        Self {
            spent_amount: spent,
            remaining_amount: budget_amount - spent,
            percentage_used,
            is_overspent: spent > budget_amount,
        }
    }
}

/// Percentages at which a budget is flagged
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertThresholds {
    /// At or above this, a budget is in the warning band
    #[serde(default = "default_warning")]
    pub warning: f64,

    /// At or above this (and below warning), spending is high but on track
    #[serde(default = "default_on_track")]
    pub on_track: f64,
}

fn default_warning() -> f64 {
    80.0
}

fn default_on_track() -> f64 {
    60.0
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            warning: default_warning(),
            on_track: default_on_track(),
        }
    }
}

impl AlertThresholds {
    pub fn validate(&self) -> Result<(), String> {
        if !self.warning.is_finite() || !self.on_track.is_finite() {
            return Err("alert thresholds must be finite".into());
        }
        if self.on_track < 0.0 || self.on_track > self.warning {
            return Err(format!(
                "on-track threshold ({}) must be between 0 and the warning threshold ({})",
                self.on_track, self.warning
            ));
        }
        Ok(())
    }
}

/// Traffic-light classification of a budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetHealth {
    Overspent,
    Warning,
    OnTrack,
    Healthy,
}

impl BudgetHealth {
    /// Classify with the default 80 / 60 thresholds
    pub fn classify(status: &BudgetStatus) -> Self {
        Self::classify_with(status, &AlertThresholds::default())
    }

    pub fn classify_with(status: &BudgetStatus, thresholds: &AlertThresholds) -> Self {
        if status.is_overspent {
            Self::Overspent
        } else if status.percentage_used >= thresholds.warning {
            Self::Warning
        } else if status.percentage_used >= thresholds.on_track {
            Self::OnTrack
        } else {
            Self::Healthy
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Overspent => "overspent",
            Self::Warning => "warning",
            Self::OnTrack => "on-track",
            Self::Healthy => "healthy",
        }
    }
}

impl fmt::Display for BudgetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A budget together with its computed status
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    #[serde(flatten)]
    pub budget: Budget,

    #[serde(flatten)]
    pub status: BudgetStatus,

    pub health: BudgetHealth,
}

impl BudgetProgress {
    pub fn new(budget: Budget, status: BudgetStatus, thresholds: &AlertThresholds) -> Self {
        let health = BudgetHealth::classify_with(&status, thresholds);
        Self {
            budget,
            status,
            health,
        }
    }
}

/// Expenses that may count toward a budget of `month`
///
/// Canceled expenses never count. An expense whose date cannot be read is
/// kept so resolving it reports the problem; one dated in another month is
/// dropped before its amount is looked at.
fn spending_in<'a>(
    expenses: &'a [Expense],
    month: Month,
    in_scope: impl Fn(&Expense) -> bool + 'a,
) -> impl Iterator<Item = &'a Expense> + 'a {
    expenses.iter().filter(move |e| {
        in_scope(*e)
            && e.status().counts_toward_totals()
            && e.parsed_date().map_or(true, |date| month.contains(date))
    })
}

/// Compute the status of one budget from the full expense list
///
/// Only non-canceled expenses of the budget's category dated inside the
/// budget's month count. Fails only when the budget itself is invalid.
pub fn calculate_budget_status(
    budget: &Budget,
    expenses: &[Expense],
) -> DollaResult<Checked<BudgetStatus>> {
    budget.validate()?;

    let category = budget.category;
    let relevant = spending_in(expenses, budget.month, move |e| e.category == category);

    let mut diagnostics = Diagnostics::new();
    let mut spent = Money::zero();
    for resolved in resolve_all(relevant, &mut diagnostics) {
        accumulate(&mut spent, &resolved, &mut diagnostics);
    }

    Ok(Checked::new(
        BudgetStatus::compute(budget.budget_amount, spent),
        diagnostics,
    ))
}

/// Recompute progress for every budget of `month` with default thresholds
pub fn recalculate_month(
    budgets: &[Budget],
    expenses: &[Expense],
    month: Month,
) -> DollaResult<Checked<Vec<BudgetProgress>>> {
    recalculate_month_with(budgets, expenses, month, &AlertThresholds::default())
}

/// Recompute progress for every budget of `month`
///
/// Expenses are resolved once for the whole month, so a malformed expense is
/// reported once even when several budgets share its category.
pub fn recalculate_month_with(
    budgets: &[Budget],
    expenses: &[Expense],
    month: Month,
    thresholds: &AlertThresholds,
) -> DollaResult<Checked<Vec<BudgetProgress>>> {
    let month_budgets: Vec<&Budget> = budgets.iter().filter(|b| b.month == month).collect();
    for budget in &month_budgets {
        budget.validate()?;
    }

    let categories: HashSet<Category> = month_budgets.iter().map(|b| b.category).collect();
    let relevant = spending_in(expenses, month, move |e| categories.contains(&e.category));

    let mut diagnostics = Diagnostics::new();
    let mut spent_by_category: HashMap<Category, Money> = HashMap::new();
    for resolved in resolve_all(relevant, &mut diagnostics) {
        let slot = spent_by_category
            .entry(resolved.record.category)
            .or_default();
        accumulate(slot, &resolved, &mut diagnostics);
    }

    let progress = month_budgets
        .into_iter()
        .map(|budget| {
            let spent = spent_by_category
                .get(&budget.category)
                .copied()
                .unwrap_or_default();
            let status = BudgetStatus::compute(budget.budget_amount, spent);
            BudgetProgress::new(budget.clone(), status, thresholds)
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        month = %month,
        budgets = progress.len(),
        skipped = diagnostics.len(),
        "recalculated budget progress"
    );

    Ok(Checked::new(progress, diagnostics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DollaError;
    use crate::models::RecordStatus;

    fn march() -> Month {
        Month::new(2025, 3).unwrap()
    }

    fn cents(c: i64) -> Money {
        Money::from_cents(c)
    }

    fn groceries(id: &str, date: &str, amount: f64) -> Expense {
        Expense::new(id, date, amount, Category::Groceries, "Naivas")
    }

    #[test]
    fn test_overspent_budget() {
        let status = BudgetStatus::compute(cents(20_000), cents(25_000));
        assert_eq!(status.remaining_amount, cents(-5_000));
        assert_eq!(status.percentage_used, 125.0);
        assert!(status.is_overspent);
        assert_eq!(BudgetHealth::classify(&status), BudgetHealth::Overspent);
    }

    #[test]
    fn test_warning_band_is_exact() {
        let status = BudgetStatus::compute(cents(100_000), cents(85_000));
        assert_eq!(status.percentage_used, 85.0);
        assert!(!status.is_overspent);
        assert_eq!(BudgetHealth::classify(&status), BudgetHealth::Warning);
    }

    #[test]
    fn test_classification_boundaries() {
        let at = |spent| BudgetHealth::classify(&BudgetStatus::compute(cents(10_000), cents(spent)));
        assert_eq!(at(8_000), BudgetHealth::Warning);
        assert_eq!(at(7_999), BudgetHealth::OnTrack);
        assert_eq!(at(6_000), BudgetHealth::OnTrack);
        assert_eq!(at(5_999), BudgetHealth::Healthy);
        assert_eq!(at(10_000), BudgetHealth::Warning);
        assert_eq!(at(10_001), BudgetHealth::Overspent);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = AlertThresholds {
            warning: 90.0,
            on_track: 50.0,
        };
        let status = BudgetStatus::compute(cents(10_000), cents(8_500));
        assert_eq!(
            BudgetHealth::classify_with(&status, &thresholds),
            BudgetHealth::OnTrack
        );
        assert!(thresholds.validate().is_ok());
        assert!(AlertThresholds {
            warning: 50.0,
            on_track: 60.0
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_zero_budget() {
        let untouched = BudgetStatus::compute(Money::zero(), Money::zero());
        assert_eq!(untouched.percentage_used, 0.0);
        assert!(!untouched.is_overspent);

        let spent = BudgetStatus::compute(Money::zero(), cents(1));
        assert_eq!(spent.percentage_used, 0.0);
        assert!(spent.is_overspent);
    }

    #[test]
    fn test_remaining_plus_spent_equals_budget() {
        for (budget, spent) in [(20_000, 25_000), (333, 111), (0, 7), (1_000_001, 999_999)] {
            let status = BudgetStatus::compute(cents(budget), cents(spent));
            assert_eq!(status.remaining_amount + status.spent_amount, cents(budget));
        }
    }

    #[test]
    fn test_percentage_is_monotone_in_spent() {
        let mut last = -1.0;
        for spent in (0..=30_000).step_by(750) {
            let pct = BudgetStatus::compute(cents(20_000), cents(spent)).percentage_used;
            assert!(pct >= last);
            last = pct;
        }
    }

    #[test]
    fn test_calculate_filters_month_category_and_status() {
        let budget = Budget::new("b-1", march(), Category::Groceries, cents(20_000));
        let expenses = vec![
            groceries("e-1", "2025-03-01", 100.0),
            groceries("e-2", "2025-03-31", 50.0),
            groceries("e-3", "2025-04-01", 999.0),
            groceries("e-4", "2025-03-10", 80.0).with_status(RecordStatus::Canceled),
            Expense::new("e-5", "2025-03-10", 70.0, Category::Transport, "Uber"),
            groceries("e-6", "2025-03-11", 100.0).with_status(RecordStatus::Reconciled),
        ];

        let result = calculate_budget_status(&budget, &expenses).unwrap();
        assert_eq!(result.skipped(), 0);
        assert_eq!(result.value.spent_amount, cents(25_000));
        assert!(result.value.is_overspent);
    }

    #[test]
    fn test_calculate_reports_malformed_expense() {
        let budget = Budget::new("b-1", march(), Category::Groceries, cents(10_000));
        let expenses = vec![
            groceries("e-1", "2025-03-01", 40.0),
            Expense::new("e-2", "2025-03-02", "abc", Category::Groceries, "X"),
        ];
        let result = calculate_budget_status(&budget, &expenses).unwrap();
        assert_eq!(result.value.spent_amount, cents(4_000));
        assert_eq!(result.skipped(), 1);
    }

    #[test]
    fn test_other_months_are_not_reported() {
        let budget = Budget::new("b-1", march(), Category::Groceries, cents(10_000));
        let expenses = vec![
            groceries("e-1", "2025-03-01", 40.0),
            Expense::new("e-2", "2025-04-02", "abc", Category::Groceries, "X"),
            Expense::new("e-3", "2025-03-02", "abc", Category::Groceries, "X")
                .with_status(RecordStatus::Canceled),
        ];

        let result = calculate_budget_status(&budget, &expenses).unwrap();
        assert_eq!(result.value.spent_amount, cents(4_000));
        assert_eq!(result.skipped(), 0);

        let month = recalculate_month(&[budget], &expenses, march()).unwrap();
        assert_eq!(month.skipped(), 0);
    }

    #[test]
    fn test_spent_past_i64_range_is_reported() {
        let budget = Budget::new("b-1", march(), Category::Groceries, cents(10_000));
        let expenses: Vec<Expense> = (0..11)
            .map(|i| groceries(&format!("e-{}", i), "2025-03-05", 9.0e15))
            .collect();

        let single = calculate_budget_status(&budget, &expenses).unwrap();
        assert!(single.skipped() >= 1);
        assert!(single.value.is_overspent);

        let month = recalculate_month(&[budget], &expenses, march()).unwrap();
        assert_eq!(month.skipped(), single.skipped());
        assert_eq!(month.value[0].status, single.value);
    }

    #[test]
    fn test_invalid_budget_is_fatal() {
        let budget = Budget::new("b-9", march(), Category::Groceries, cents(-100));
        let err = calculate_budget_status(&budget, &[]).unwrap_err();
        assert!(matches!(err, DollaError::InvalidBudget { .. }));

        let err = recalculate_month(&[budget], &[], march()).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_recalculate_month() {
        let budgets = vec![
            Budget::new("b-1", march(), Category::Groceries, cents(100_000)),
            Budget::new("b-2", march(), Category::Transport, cents(20_000)),
            Budget::new("b-3", march().next(), Category::Groceries, cents(1)),
        ];
        let expenses = vec![
            groceries("e-1", "2025-03-05", 850.0),
            Expense::new("e-2", "2025-03-06", 250.0, Category::Transport, "Bolt"),
            Expense::new("e-3", "bad", 1.0, Category::Transport, "Bolt"),
            Expense::new("e-4", "bad", 1.0, Category::Health, "Clinic"),
        ];

        let result = recalculate_month(&budgets, &expenses, march()).unwrap();
        assert_eq!(result.value.len(), 2);
        assert_eq!(result.value[0].health, BudgetHealth::Warning);
        assert_eq!(result.value[1].health, BudgetHealth::Overspent);
        assert_eq!(result.skipped(), 1);

        let again = recalculate_month(&budgets, &expenses, march()).unwrap();
        assert_eq!(again.value, result.value);
    }

    #[test]
    fn test_progress_serializes_flat() {
        let budget = Budget::new("b-1", march(), Category::Groceries, cents(20_000));
        let status = BudgetStatus::compute(budget.budget_amount, cents(5_000));
        let progress = BudgetProgress::new(budget, status, &AlertThresholds::default());

        let json = serde_json::to_value(&progress).unwrap();
        assert_eq!(json["id"], "b-1");
        assert_eq!(json["month"], "2025-03");
        assert_eq!(json["budgetAmount"], 200.0);
        assert_eq!(json["spentAmount"], 50.0);
        assert_eq!(json["remainingAmount"], 150.0);
        assert_eq!(json["percentageUsed"], 25.0);
        assert_eq!(json["isOverspent"], false);
        assert_eq!(json["health"], "healthy");
    }
}
