//! Shared shape of incomes and expenses
//!
//! Dates and amounts are kept exactly as the backend sent them and are only
//! resolved when a computation needs them. That lets one malformed record be
//! skipped and reported without rejecting the whole batch.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::AccountId;
use super::money::Money;
use crate::diagnostics::Anomaly;

/// Lifecycle status of an imported transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// Created from a statement import or by hand, not yet confirmed
    #[default]
    Imported,
    /// Matched against an external statement
    Reconciled,
    /// Voided; never counted in aggregates
    Canceled,
}

impl RecordStatus {
    /// Flip between imported and reconciled; canceled records stay canceled
    pub fn toggle_reconciled(self) -> Self {
        match self {
            Self::Imported => Self::Reconciled,
            Self::Reconciled => Self::Imported,
            Self::Canceled => Self::Canceled,
        }
    }

    pub fn counts_toward_totals(&self) -> bool {
        !matches!(self, Self::Canceled)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Imported => write!(f, "imported"),
            Self::Reconciled => write!(f, "reconciled"),
            Self::Canceled => write!(f, "canceled"),
        }
    }
}

/// An amount as received, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawAmount {
    /// Resolve into Money, or describe why that is impossible
    pub fn to_money(&self) -> Result<Money, Anomaly> {
        match self {
            Self::Number(value) => Money::from_decimal(*value).ok_or(Anomaly::NonFiniteAmount),
            Self::Text(text) => {
                let value: f64 = text.trim().parse().map_err(|_| Anomaly::NonNumericAmount {
                    value: text.clone(),
                })?;
                Money::from_decimal(value).ok_or(Anomaly::NonFiniteAmount)
            }
            Self::Missing => Err(Anomaly::MissingField { field: "amount" }),
        }
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Money> for RawAmount {
    fn from(value: Money) -> Self {
        Self::Number(value.to_decimal())
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_money() {
            Ok(money) => write!(f, "{}", money),
            Err(_) => match self {
                Self::Number(value) => write!(f, "{}", value),
                Self::Text(text) => f.write_str(text),
                Self::Missing => Ok(()),
            },
        }
    }
}

/// Parse a record date as a local calendar date
///
/// Accepts `YYYY-MM-DD`, and RFC 3339 timestamps, which contribute the
/// calendar date written in their own offset.
pub fn parse_record_date(value: &str) -> Result<NaiveDate, Anomaly> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| Anomaly::UnparseableDate {
            value: value.to_string(),
        })
}

/// Behaviour shared by incomes and expenses
pub trait MonetaryRecord {
    /// Kind label used in diagnostics
    const KIND: &'static str;

    fn record_id(&self) -> &str;
    fn raw_date(&self) -> &str;
    fn raw_amount(&self) -> &RawAmount;
    fn category(&self) -> Category;
    fn description(&self) -> &str;
    fn status(&self) -> RecordStatus;
    fn account_id(&self) -> Option<&AccountId>;

    /// Text shown when the description is empty (source or merchant)
    fn counterparty(&self) -> &str;

    fn parsed_date(&self) -> Result<NaiveDate, Anomaly> {
        parse_record_date(self.raw_date())
    }

    fn money(&self) -> Result<Money, Anomaly> {
        self.raw_amount().to_money()
    }

    /// Date and amount together, or the first problem found
    fn resolve(&self) -> Result<(NaiveDate, Money), Anomaly> {
        Ok((self.parsed_date()?, self.money()?))
    }

    /// Description, falling back to the counterparty when empty
    fn display_description(&self) -> &str {
        if self.description().is_empty() {
            self.counterparty()
        } else {
            self.description()
        }
    }
}
