//! Monthly category budget
//!
//! A budget is only a ceiling for one category in one month. Spending figures
//! the backend may attach (`spentAmount`, `percentageUsed`, ...) are ignored
//! on input and always recomputed from expenses.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::BudgetId;
use super::money::Money;
use super::period::Month;
use crate::error::{DollaError, DollaResult};

/// A spending ceiling for a category in a calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: BudgetId,

    /// Month the ceiling applies to, `YYYY-MM`
    pub month: Month,

    pub category: Category,

    pub budget_amount: Money,
}

impl Budget {
    pub fn new(id: impl Into<BudgetId>, month: Month, category: Category, amount: Money) -> Self {
        Self {
            id: id.into(),
            month,
            category,
            budget_amount: amount,
        }
    }

    /// Reject budgets that cannot be evaluated
    pub fn validate(&self) -> DollaResult<()> {
        if self.budget_amount.is_negative() {
            return Err(DollaError::invalid_budget(
                self.id.as_str(),
                format!("budget amount cannot be negative ({})", self.budget_amount),
            ));
        }
        if !self.category.is_budgetable() {
            return Err(DollaError::invalid_budget(
                self.id.as_str(),
                format!("'{}' is an income category", self.category),
            ));
        }
        Ok(())
    }
}

/// Named-field update for a budget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BudgetPatch {
    pub month: Option<Month>,
    pub category: Option<Category>,
    pub budget_amount: Option<Money>,
}

impl BudgetPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> DollaResult<()> {
        if let Some(amount) = self.budget_amount {
            if amount.is_negative() {
                return Err(DollaError::Validation(
                    "budget amount cannot be negative".into(),
                ));
            }
        }
        if let Some(category) = self.category {
            if !category.is_budgetable() {
                return Err(DollaError::Validation(format!(
                    "cannot budget for income category '{}'",
                    category
                )));
            }
        }
        Ok(())
    }

    /// Validate and return the merged budget; the input is left untouched
    pub fn apply(&self, budget: &Budget) -> DollaResult<Budget> {
        self.validate()?;
        let mut updated = budget.clone();
        if let Some(month) = self.month {
            updated.month = month;
        }
        if let Some(category) = self.category {
            updated.category = category;
        }
        if let Some(amount) = self.budget_amount {
            updated.budget_amount = amount;
        }
        updated.validate()?;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march() -> Month {
        Month::new(2025, 3).unwrap()
    }

    #[test]
    fn test_derived_fields_are_ignored() {
        let json = r#"{
            "id": "b-1",
            "month": "2025-03",
            "category": "groceries",
            "budgetAmount": 200,
            "spentAmount": 9999,
            "percentageUsed": 4999.5,
            "isOverspent": true
        }"#;
        let budget: Budget = serde_json::from_str(json).unwrap();
        assert_eq!(budget.month, march());
        assert_eq!(budget.budget_amount.cents(), 20_000);
        assert!(budget.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let budget = Budget::new("b-2", march(), Category::Transport, Money::from_cents(-1));
        let err = budget.validate().unwrap_err();
        assert!(matches!(err, DollaError::InvalidBudget { .. }));
    }

    #[test]
    fn test_validate_rejects_income_category() {
        let budget = Budget::new("b-3", march(), Category::SalaryWages, Money::from_cents(100));
        assert!(budget.validate().is_err());

        let other = Budget::new("b-4", march(), Category::Other, Money::zero());
        assert!(other.validate().is_ok());
    }

    #[test]
    fn test_patch() {
        let budget = Budget::new("b-5", march(), Category::Health, Money::from_cents(5_000));
        let patch = BudgetPatch {
            budget_amount: Some(Money::from_cents(7_500)),
            ..Default::default()
        };
        let updated = patch.apply(&budget).unwrap();
        assert_eq!(updated.budget_amount.cents(), 7_500);
        assert_eq!(budget.budget_amount.cents(), 5_000);

        let income_category = BudgetPatch {
            category: Some(Category::Dividends),
            ..Default::default()
        };
        assert!(income_category.apply(&budget).unwrap_err().is_validation());
    }
}
