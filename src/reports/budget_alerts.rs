//! Budget alerts
//!
//! Groups a month's budgets into the three alert bands shown on the budget
//! page.

use serde::Serialize;

use crate::services::{AlertThresholds, BudgetProgress};

/// Number of high-spending budgets listed
const HIGH_SPENDING_LIMIT: usize = 3;

/// Budgets that need attention
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlerts {
    /// Spent more than budgeted
    pub overspent: Vec<BudgetProgress>,
    /// Not overspent, at or above the warning threshold
    pub warning: Vec<BudgetProgress>,
    /// Between the on-track and warning thresholds, first three in input order
    pub high_spending: Vec<BudgetProgress>,
}

impl BudgetAlerts {
    pub fn from_progress(progress: &[BudgetProgress], thresholds: &AlertThresholds) -> Self {
        let overspent = progress
            .iter()
            .filter(|p| p.status.is_overspent)
            .cloned()
            .collect();

        let warning = progress
            .iter()
            .filter(|p| !p.status.is_overspent && p.status.percentage_used >= thresholds.warning)
            .cloned()
            .collect();

        let high_spending = progress
            .iter()
            .filter(|p| {
                !p.status.is_overspent
                    && p.status.percentage_used >= thresholds.on_track
                    && p.status.percentage_used < thresholds.warning
            })
            .take(HIGH_SPENDING_LIMIT)
            .cloned()
            .collect();

        Self {
            overspent,
            warning,
            high_spending,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.overspent.is_empty() && self.warning.is_empty() && self.high_spending.is_empty()
    }

    /// Total number of budgets flagged
    pub fn count(&self) -> usize {
        self.overspent.len() + self.warning.len() + self.high_spending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, Category, Money, Month};
    use crate::services::BudgetStatus;

    fn progress(id: &str, category: Category, spent: i64) -> BudgetProgress {
        let month = Month::new(2025, 3).unwrap();
        let budget = Budget::new(id, month, category, Money::from_cents(10_000));
        let status = BudgetStatus::compute(budget.budget_amount, Money::from_cents(spent));
        BudgetProgress::new(budget, status, &AlertThresholds::default())
    }

    #[test]
    fn test_bands() {
        let all = vec![
            progress("b-1", Category::Groceries, 12_000),
            progress("b-2", Category::Transport, 9_000),
            progress("b-3", Category::Health, 6_500),
            progress("b-4", Category::Clothing, 7_500),
            progress("b-5", Category::Education, 6_000),
            progress("b-6", Category::Entertainment, 7_000),
            progress("b-7", Category::Utilities, 1_000),
        ];
        let alerts = BudgetAlerts::from_progress(&all, &AlertThresholds::default());

        assert_eq!(alerts.overspent.len(), 1);
        assert_eq!(alerts.warning.len(), 1);
        assert_eq!(alerts.warning[0].budget.id.as_str(), "b-2");

        let high: Vec<&str> = alerts
            .high_spending
            .iter()
            .map(|p| p.budget.id.as_str())
            .collect();
        // b-6 is in the band too but only the first three are listed
        assert_eq!(high, vec!["b-3", "b-4", "b-5"]);
        assert_eq!(alerts.count(), 5);
    }

    #[test]
    fn test_no_alerts() {
        let all = vec![progress("b-1", Category::Groceries, 100)];
        assert!(BudgetAlerts::from_progress(&all, &AlertThresholds::default()).is_empty());
    }
}
