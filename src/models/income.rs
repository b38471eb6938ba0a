//! Income model
//!
//! `originalAmount` is carried through untouched. Aggregates always use
//! `amount`; no currency conversion happens here.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::currency::Currency;
use super::ids::{AccountId, IncomeId};
use super::money::Money;
use super::record::{parse_record_date, MonetaryRecord, RawAmount, RecordStatus};
use crate::error::{DollaError, DollaResult};

/// Money coming in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: IncomeId,

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

    /// Who paid (employer, client, tenant)
    #[serde(default)]
    pub source: String,

    #[serde(default)]
    pub currency: Currency,

    #[serde(default)]
    pub is_recurring: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_amount: Option<Money>,
}

impl Income {
    pub fn new(
        id: impl Into<IncomeId>,
        date: impl Into<String>,
        amount: impl Into<RawAmount>,
        category: Category,
        source: impl Into<String>,
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
            source: source.into(),
            currency: Currency::default(),
            is_recurring: false,
            original_amount: None,
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

impl MonetaryRecord for Income {
    const KIND: &'static str = "income";

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
        &self.source
    }
}

/// Named-field update for an income
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IncomePatch {
    pub date: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub status: Option<RecordStatus>,
    pub account_id: Option<AccountId>,
    pub payment_method: Option<String>,
    pub source: Option<String>,
    pub currency: Option<Currency>,
    pub is_recurring: Option<bool>,
    pub original_amount: Option<Money>,
}

impl IncomePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> DollaResult<()> {
        if let Some(date) = &self.date {
            parse_record_date(date)
                .map_err(|e| DollaError::Validation(format!("income date: {}", e)))?;
        }
        if let Some(amount) = self.amount {
            if amount.is_negative() {
                return Err(DollaError::Validation(
                    "income amount cannot be negative".into(),
                ));
            }
        }
        if let Some(source) = &self.source {
            if source.trim().is_empty() {
                return Err(DollaError::Validation("income source cannot be empty".into()));
            }
        }
        Ok(())
    }

    /// Validate and return the merged income; the input is left untouched
    pub fn apply(&self, income: &Income) -> DollaResult<Income> {
        self.validate()?;
        let mut updated = income.clone();
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
        if let Some(source) = &self.source {
            updated.source = source.clone();
        }
        if let Some(currency) = self.currency {
            updated.currency = currency;
        }
        if let Some(is_recurring) = self.is_recurring {
            updated.is_recurring = is_recurring;
        }
        if let Some(original_amount) = self.original_amount {
            updated.original_amount = Some(original_amount);
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "id": "i-1",
            "date": "2025-01-31T09:00:00Z",
            "amount": "85000",
            "category": "salary / wages",
            "source": "Acme Ltd"
        }"#;
        let income: Income = serde_json::from_str(json).unwrap();
        assert_eq!(income.currency, Currency::Kes);
        assert_eq!(income.status, RecordStatus::Imported);
        assert!(!income.is_recurring);
        assert!(income.original_amount.is_none());

        let (date, money) = income.resolve().unwrap();
        assert_eq!(date.to_string(), "2025-01-31");
        assert_eq!(money.cents(), 8_500_000);
        assert_eq!(income.display_description(), "Acme Ltd");
    }

    #[test]
    fn test_original_amount_is_passed_through() {
        let json = r#"{
            "id": "i-2",
            "date": "2025-01-15",
            "amount": 1300,
            "originalAmount": 10,
            "currency": "USD",
            "category": "freelance / gig work",
            "source": "Upwork",
            "description": "logo design"
        }"#;
        let income: Income = serde_json::from_str(json).unwrap();
        assert_eq!(income.money().unwrap().cents(), 130_000);
        assert_eq!(income.original_amount.unwrap().cents(), 1_000);
        assert_eq!(income.display_description(), "logo design");

        let value = serde_json::to_value(&income).unwrap();
        assert_eq!(value["originalAmount"], 10.0);
    }

    #[test]
    fn test_patch_returns_new_income() {
        let original = Income::new("i-3", "2025-03-01", 500.0, Category::Interest, "Bank");
        let patch = IncomePatch {
            is_recurring: Some(true),
            status: Some(RecordStatus::Reconciled),
            ..Default::default()
        };
        let updated = patch.apply(&original).unwrap();
        assert!(updated.is_recurring);
        assert_eq!(updated.status, RecordStatus::Reconciled);
        assert!(!original.is_recurring);
    }

    #[test]
    fn test_patch_rejects_empty_source() {
        let patch = IncomePatch {
            source: Some("   ".into()),
            ..Default::default()
        };
        assert!(patch.validate().unwrap_err().is_validation());
    }
}
