//! Expense model

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::{AccountId, ExpenseId};
use super::money::Money;
use super::record::{parse_record_date, MonetaryRecord, RawAmount, RecordStatus};
use crate::error::{DollaError, DollaResult};

/// Money going out, as the backend reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: ExpenseId,

    /// ISO date string as received
    pub date: String,

    #[serde(default)]
    pub amount: RawAmount,

    pub category: Category,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub status: RecordStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<AccountId>,

    #[serde(default)]
    pub payment_method: String,

    #[serde(default)]
    pub merchant: String,
}

impl Expense {
    /// Create an imported expense
    pub fn new(
        id: impl Into<ExpenseId>,
        date: impl Into<String>,
        amount: impl Into<RawAmount>,
        category: Category,
        merchant: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            amount: amount.into(),
            category,
            description: String::new(),
            status: RecordStatus::Imported,
            account_id: None,
            payment_method: String::new(),
            merchant: merchant.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_status(mut self, status: RecordStatus) -> Self {
        self.status = status;
        self
    }
}

impl MonetaryRecord for Expense {
    const KIND: &'static str = "expense";

    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn raw_date(&self) -> &str {
        &self.date
    }

    fn raw_amount(&self) -> &RawAmount {
        &self.amount
    }

    fn category(&self) -> Category {
        self.category
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn status(&self) -> RecordStatus {
        self.status
    }

    fn account_id(&self) -> Option<&AccountId> {
        self.account_id.as_ref()
    }

    fn counterparty(&self) -> &str {
        &self.merchant
    }
}

/// Named-field update for an expense; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExpensePatch {
    pub date: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub status: Option<RecordStatus>,
    pub account_id: Option<AccountId>,
    pub payment_method: Option<String>,
    pub merchant: Option<String>,
}

impl ExpensePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Check every field that is present
    pub fn validate(&self) -> DollaResult<()> {
        if let Some(date) = &self.date {
            parse_record_date(date)
                .map_err(|e| DollaError::Validation(format!("expense date: {}", e)))?;
        }
        if let Some(amount) = self.amount {
            if amount.is_negative() {
                return Err(DollaError::Validation(
                    "expense amount cannot be negative".into(),
                ));
            }
        }
        if let Some(merchant) = &self.merchant {
            if merchant.trim().is_empty() {
                return Err(DollaError::Validation(
                    "expense merchant cannot be empty".into(),
                ));
            }
        }
        Ok(())
    }

    /// Validate and return the merged expense; the input is left untouched
    pub fn apply(&self, expense: &Expense) -> DollaResult<Expense> {
        self.validate()?;
        let mut updated = expense.clone();
        if let Some(date) = &self.date {
            updated.date = date.trim().to_string();
        }
        if let Some(amount) = self.amount {
            updated.amount = amount.into();
        }
        if let Some(category) = self.category {
            updated.category = category;
        }
        if let Some(description) = &self.description {
            updated.description = description.clone();
        }
        if let Some(status) = self.status {
            updated.status = status;
        }
        if let Some(account_id) = &self.account_id {
            updated.account_id = Some(account_id.clone());
        }
        if let Some(payment_method) = &self.payment_method {
            updated.payment_method = payment_method.clone();
        }
        if let Some(merchant) = &self.merchant {
            updated.merchant = merchant.clone();
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expense {
        Expense::new("e-1", "2025-01-10", 120.0, Category::Groceries, "Naivas")
    }

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{
            "id": "e-7",
            "userId": "user_1",
            "date": "2025-02-01",
            "merchant": "KPLC",
            "category": "utilities",
            "description": "",
            "paymentMethod": "m-pesa (paybill)",
            "amount": 2500,
            "status": "reconciled",
            "accountId": "acc-1"
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id.as_str(), "e-7");
        assert_eq!(expense.category, Category::Utilities);
        assert_eq!(expense.status, RecordStatus::Reconciled);
        assert_eq!(expense.money().unwrap().cents(), 250_000);
        assert_eq!(expense.display_description(), "KPLC");
    }

    #[test]
    fn test_missing_amount_is_kept_for_diagnostics() {
        let json = r#"{"id": "e-8", "date": "2025-02-01", "category": "transport"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.amount, RawAmount::Missing);
        assert!(expense.resolve().is_err());
    }

    #[test]
    fn test_patch_applies_named_fields() {
        let patch = ExpensePatch {
            amount: Some(Money::from_cents(9_900)),
            description: Some("weekly shop".into()),
            ..Default::default()
        };
        let original = sample();
        let updated = patch.apply(&original).unwrap();

        assert_eq!(updated.money().unwrap().cents(), 9_900);
        assert_eq!(updated.description, "weekly shop");
        assert_eq!(updated.merchant, "Naivas");
        assert_eq!(original.money().unwrap().cents(), 12_000);
    }

    #[test]
    fn test_patch_validation() {
        let bad_date = ExpensePatch {
            date: Some("31/01/2025".into()),
            ..Default::default()
        };
        assert!(bad_date.apply(&sample()).unwrap_err().is_validation());

        let negative = ExpensePatch {
            amount: Some(Money::from_cents(-1)),
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        assert!(ExpensePatch::default().is_empty());
    }

    #[test]
    fn test_patch_rejects_unknown_fields() {
        let result: Result<ExpensePatch, _> = serde_json::from_str(r#"{"spentAmount": 5}"#);
        assert!(result.is_err());
    }
}
