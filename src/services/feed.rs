//! Recent transaction feed
//!
//! Merges incomes and expenses into one newest-first list. The feed shows
//! what happened, so canceled records are listed like any other.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::diagnostics::{Checked, Diagnostics};
use crate::models::{Category, Expense, Income, Money, MonetaryRecord, RecordStatus};

/// Which side of the ledger a feed entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// One row of the recent transactions list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentTransaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Money,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Category,
    pub status: RecordStatus,
}

impl RecentTransaction {
    /// Amount with its ledger sign: expenses negative
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

fn entry_for<R: MonetaryRecord>(
    record: &R,
    kind: TransactionKind,
    diagnostics: &mut Diagnostics,
) -> Option<RecentTransaction> {
    let date = match record.parsed_date() {
        Ok(date) => date,
        Err(anomaly) => {
            diagnostics.skip(R::KIND, Some(record.record_id()), anomaly);
            return None;
        }
    };
    let amount = match record.money() {
        Ok(amount) => amount,
        Err(anomaly) => {
            // Still listed, the date is known; only the amount is unusable
            diagnostics.skip(R::KIND, Some(record.record_id()), anomaly);
            Money::zero()
        }
    };

    Some(RecentTransaction {
        id: record.record_id().to_string(),
        date,
        description: record.display_description().to_string(),
        amount,
        kind,
        category: record.category(),
        status: record.status(),
    })
}

/// Merge incomes and expenses, newest first, keeping at most `limit` rows
///
/// Sorting is stable: entries on the same date keep input order, with
/// incomes ahead of expenses.
pub fn merge_recent(
    incomes: &[Income],
    expenses: &[Expense],
    limit: usize,
) -> Checked<Vec<RecentTransaction>> {
    let mut diagnostics = Diagnostics::new();

    let mut entries: Vec<RecentTransaction> = incomes
        .iter()
        .filter_map(|i| entry_for(i, TransactionKind::Income, &mut diagnostics))
        .collect();
    entries.extend(
        expenses
            .iter()
            .filter_map(|e| entry_for(e, TransactionKind::Expense, &mut diagnostics)),
    );

    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries.truncate(limit);

    Checked::new(entries, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income(id: &str, date: &str) -> Income {
        Income::new(id, date, 100.0, Category::SalaryWages, "Acme")
    }

    fn expense(id: &str, date: &str) -> Expense {
        Expense::new(id, date, 20.0, Category::Transport, "Bolt")
    }

    #[test]
    fn test_empty_inputs_give_empty_feed() {
        let feed = merge_recent(&[], &[], 10);
        assert!(feed.value.is_empty());
        assert_eq!(feed.skipped(), 0);
    }

    #[test]
    fn test_limit_and_descending_order() {
        let incomes = vec![
            income("i-1", "2025-01-01"),
            income("i-2", "2025-01-05"),
            income("i-3", "2025-01-03"),
        ];
        let expenses = vec![expense("e-1", "2025-01-04"), expense("e-2", "2025-01-02")];

        let feed = merge_recent(&incomes, &expenses, 4).value;
        let ids: Vec<&str> = feed.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["i-2", "e-1", "i-3", "e-2"]);
        assert!(feed.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_same_date_keeps_incomes_first() {
        let incomes = vec![income("i-1", "2025-02-01"), income("i-2", "2025-02-01")];
        let expenses = vec![expense("e-1", "2025-02-01")];
        let feed = merge_recent(&incomes, &expenses, 10).value;
        let ids: Vec<&str> = feed.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["i-1", "i-2", "e-1"]);
    }

    #[test]
    fn test_description_falls_back_to_counterparty() {
        let incomes = vec![income("i-1", "2025-01-01").with_description("January pay")];
        let expenses = vec![expense("e-1", "2025-01-01")];
        let feed = merge_recent(&incomes, &expenses, 10).value;
        assert_eq!(feed[0].description, "January pay");
        assert_eq!(feed[1].description, "Bolt");
        assert_eq!(feed[1].signed_amount().cents(), -2_000);
    }

    #[test]
    fn test_bad_records() {
        let incomes = vec![
            income("i-1", "someday"),
            Income::new("i-2", "2025-01-02", "abc", Category::Interest, "Bank"),
        ];
        let feed = merge_recent(&incomes, &[], 10);
        assert_eq!(feed.value.len(), 1);
        assert_eq!(feed.value[0].id, "i-2");
        assert_eq!(feed.value[0].amount, Money::zero());
        assert_eq!(feed.skipped(), 2);
    }

    #[test]
    fn test_serialized_shape() {
        let feed = merge_recent(&[], &[expense("e-1", "2025-01-04")], 1).value;
        let json = serde_json::to_value(&feed[0]).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["date"], "2025-01-04");
        assert_eq!(json["category"], "transport");
        assert_eq!(json["amount"], 20.0);
    }
}
