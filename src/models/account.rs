//! Account model
//!
//! Represents a place money is held (bank, SACCO, mobile wallet, cash). The
//! balance is owned by the backend; this crate only reads it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::ids::AccountId;
use super::money::Money;
use crate::error::{DollaError, DollaResult};

/// A financial account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Equity Current")
    pub name: String,

    /// Free-form type label ("bank", "m-pesa", "sacco", ...)
    #[serde(default)]
    pub account_type: String,

    /// Current balance; negative for overdrawn or credit accounts
    #[serde(default)]
    pub balance: Money,

    #[serde(default)]
    pub currency: Currency,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<DateTime<Utc>>,
}

impl Account {
    /// Create an account with the given balance
    pub fn new(
        id: impl Into<AccountId>,
        name: impl Into<String>,
        account_type: impl Into<String>,
        balance: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            account_type: account_type.into(),
            balance,
            currency: Currency::default(),
            description: None,
            date_created: None,
        }
    }

    /// Match by id, or by name ignoring case
    pub fn matches(&self, identifier: &str) -> bool {
        self.id.as_str() == identifier || self.name.eq_ignore_ascii_case(identifier.trim())
    }
}

/// Named-field update for an account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub account_type: Option<String>,
    pub balance: Option<Money>,
    pub currency: Option<Currency>,
    pub description: Option<String>,
}

impl AccountPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> DollaResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DollaError::Validation("account name cannot be empty".into()));
            }
            if name.len() > 100 {
                return Err(DollaError::Validation(format!(
                    "account name too long ({} chars, max 100)",
                    name.len()
                )));
            }
        }
        Ok(())
    }

    pub fn apply(&self, account: &Account) -> DollaResult<Account> {
        self.validate()?;
        let mut updated = account.clone();
        if let Some(name) = &self.name {
            updated.name = name.trim().to_string();
        }
        if let Some(account_type) = &self.account_type {
            updated.account_type = account_type.clone();
        }
        if let Some(balance) = self.balance {
            updated.balance = balance;
        }
        if let Some(currency) = self.currency {
            updated.currency = currency;
        }
        if let Some(description) = &self.description {
            updated.description = Some(description.clone());
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_shape() {
        let json = r#"{
            "id": "acc-1",
            "userId": "user_1",
            "name": "M-Pesa",
            "accountType": "mobile money",
            "balance": -320.5,
            "currency": "KES",
            "dateCreated": "2024-11-02T08:15:00Z"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.balance.cents(), -32_050);
        assert!(account.description.is_none());
        assert!(account.date_created.is_some());
        assert!(account.matches("m-pesa"));
        assert!(account.matches("acc-1"));
        assert!(!account.matches("Equity"));
    }

    #[test]
    fn test_patch() {
        let account = Account::new("acc-2", "Equity", "bank", Money::from_cents(100));
        let patch = AccountPatch {
            name: Some(" Equity Current ".into()),
            balance: Some(Money::from_cents(-5_000)),
            ..Default::default()
        };
        let updated = patch.apply(&account).unwrap();
        assert_eq!(updated.name, "Equity Current");
        assert_eq!(updated.balance.cents(), -5_000);
        assert_eq!(account.name, "Equity");

        let empty_name = AccountPatch {
            name: Some("".into()),
            ..Default::default()
        };
        assert!(empty_name.apply(&account).is_err());
    }
}
