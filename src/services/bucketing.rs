//! Period bucketing
//!
//! Groups monetary records by a key derived from their date (calendar month
//! or day) and sums amounts per key. Keys come back in ascending order.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::diagnostics::{Anomaly, Checked, Diagnostics};
use crate::models::{Money, MonetaryRecord, Month};

/// A record with its date and amount resolved
pub(crate) struct Resolved<'a, R> {
    pub record: &'a R,
    pub date: NaiveDate,
    pub amount: Money,
}

/// Resolve every record, reporting the ones that cannot be used
///
/// Status is not looked at here; callers that leave canceled records out
/// filter them before resolving.
pub(crate) fn resolve_all<'a, R, I>(
    records: I,
    diagnostics: &mut Diagnostics,
) -> Vec<Resolved<'a, R>>
where
    R: MonetaryRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    records
        .into_iter()
        .filter_map(|record| match record.resolve() {
            Ok((date, amount)) => Some(Resolved {
                record,
                date,
                amount,
            }),
            Err(anomaly) => {
                diagnostics.skip(R::KIND, Some(record.record_id()), anomaly);
                None
            }
        })
        .collect()
}

/// Add a resolved amount into `slot`
///
/// A record whose amount would push the total past the i64 range is reported
/// and left out; `slot` keeps its previous value.
pub(crate) fn accumulate<R: MonetaryRecord>(
    slot: &mut Money,
    resolved: &Resolved<'_, R>,
    diagnostics: &mut Diagnostics,
) {
    match slot.checked_add(resolved.amount) {
        Some(sum) => *slot = sum,
        None => diagnostics.skip(
            R::KIND,
            Some(resolved.record.record_id()),
            Anomaly::TotalOutOfRange,
        ),
    }
}

/// Sum record amounts per key
///
/// # Examples
/// ```
/// use dolla::models::{Category, Expense, Month};
/// use dolla::services::bucketing::bucket_by;
///
/// let expenses = vec![
///     Expense::new("e-1", "2025-01-05", 10.0, Category::Transport, "Matatu"),
///     Expense::new("e-2", "2025-01-20", 5.0, Category::Transport, "Matatu"),
///     Expense::new("e-3", "2025-02-01", 7.0, Category::Transport, "Matatu"),
/// ];
/// let by_month = bucket_by(&expenses, Month::of);
/// assert_eq!(by_month.value.len(), 2);
/// assert_eq!(by_month.value[&Month::new(2025, 1).unwrap()].cents(), 1_500);
/// ```
pub fn bucket_by<R, K, F>(records: &[R], key_fn: F) -> Checked<BTreeMap<K, Money>>
where
    R: MonetaryRecord,
    K: Ord,
    F: Fn(NaiveDate) -> K,
{
    let mut diagnostics = Diagnostics::new();
    let mut buckets: BTreeMap<K, Money> = BTreeMap::new();

    for resolved in resolve_all(records, &mut diagnostics) {
        let slot = buckets.entry(key_fn(resolved.date)).or_default();
        accumulate(slot, &resolved, &mut diagnostics);
    }

    Checked::new(buckets, diagnostics)
}

/// Totals per calendar month
pub fn sum_by_month<R: MonetaryRecord>(records: &[R]) -> Checked<BTreeMap<Month, Money>> {
    bucket_by(records, Month::of)
}

/// Totals per calendar day
pub fn sum_by_day<R: MonetaryRecord>(records: &[R]) -> Checked<BTreeMap<NaiveDate, Money>> {
    bucket_by(records, |date| date)
}

/// Grand total of all usable records
pub fn total<R: MonetaryRecord>(records: &[R]) -> Checked<Money> {
    let mut diagnostics = Diagnostics::new();
    let mut sum = Money::zero();
    for resolved in resolve_all(records, &mut diagnostics) {
        accumulate(&mut sum, &resolved, &mut diagnostics);
    }
    Checked::new(sum, diagnostics)
}

/// Income and expenses for one bucket, shaped for area charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowPoint<K> {
    #[serde(rename = "date")]
    pub period: K,
    pub income: Money,
    pub expenses: Money,
}

impl<K> CashFlowPoint<K> {
    /// Income minus expenses
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Bucket incomes and expenses with the same key and pair them up
///
/// A key present on only one side gets zero on the other.
pub fn cash_flow_by<I, E, K, F>(
    incomes: &[I],
    expenses: &[E],
    key_fn: F,
) -> Checked<Vec<CashFlowPoint<K>>>
where
    I: MonetaryRecord,
    E: MonetaryRecord,
    K: Ord,
    F: Fn(NaiveDate) -> K,
{
    let mut diagnostics = Diagnostics::new();
    let mut pairs: BTreeMap<K, (Money, Money)> = BTreeMap::new();

    for resolved in resolve_all(incomes, &mut diagnostics) {
        let (income, _) = pairs.entry(key_fn(resolved.date)).or_default();
        accumulate(income, &resolved, &mut diagnostics);
    }
    for resolved in resolve_all(expenses, &mut diagnostics) {
        let (_, spent) = pairs.entry(key_fn(resolved.date)).or_default();
        accumulate(spent, &resolved, &mut diagnostics);
    }

    let points = pairs
        .into_iter()
        .map(|(period, (income, expenses))| CashFlowPoint {
            period,
            income,
            expenses,
        })
        .collect();

    Checked::new(points, diagnostics)
}
