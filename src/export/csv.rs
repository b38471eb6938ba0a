//! CSV export
//!
//! Column layouts follow the dashboard's spreadsheet exports. Amounts are
//! written as plain decimals; records whose amount cannot be read keep the
//! raw value so nothing is silently lost.

use serde::Serialize;
use std::io::Write;

use crate::error::DollaResult;
use crate::models::{Account, Expense, Income};
use crate::services::{BudgetProgress, RecentTransaction};

#[derive(Serialize)]
struct IncomeRow<'a> {
    date: &'a str,
    source: &'a str,
    category: &'static str,
    description: &'a str,
    payment_method: &'a str,
    amount: String,
    currency: &'static str,
    status: String,
}

#[derive(Serialize)]
struct ExpenseRow<'a> {
    date: &'a str,
    merchant: &'a str,
    category: &'static str,
    description: &'a str,
    payment_method: &'a str,
    amount: String,
    status: String,
}

#[derive(Serialize)]
struct AccountRow<'a> {
    name: &'a str,
    account_type: &'a str,
    balance: String,
    currency: &'static str,
    description: &'a str,
    created_date: String,
}

#[derive(Serialize)]
struct BudgetRow {
    month: String,
    category: &'static str,
    budget: String,
    spent: String,
    remaining: String,
    percentage_used: String,
    status: &'static str,
}

#[derive(Serialize)]
struct FeedRow<'a> {
    date: String,
    kind: String,
    description: &'a str,
    category: &'static str,
    amount: String,
    status: String,
}

/// A serializable CSV row with a fixed header line
///
/// The header is written even when there are no rows, so an empty export
/// still names its columns.
trait CsvRow: Serialize {
    const HEADERS: &'static [&'static str];
}

impl CsvRow for IncomeRow<'_> {
    const HEADERS: &'static [&'static str] = &[
        "Date",
        "Source",
        "Category",
        "Description",
        "Payment Method",
        "Amount",
        "Currency",
        "Status",
    ];
}

impl CsvRow for ExpenseRow<'_> {
    const HEADERS: &'static [&'static str] = &[
        "Date",
        "Merchant",
        "Category",
        "Description",
        "Payment Method",
        "Amount",
        "Status",
    ];
}

impl CsvRow for AccountRow<'_> {
    const HEADERS: &'static [&'static str] = &[
        "Name",
        "Account Type",
        "Balance",
        "Currency",
        "Description",
        "Created Date",
    ];
}

impl CsvRow for BudgetRow {
    const HEADERS: &'static [&'static str] = &[
        "Month",
        "Category",
        "Budget",
        "Spent",
        "Remaining",
        "Percentage Used",
        "Status",
    ];
}

impl CsvRow for FeedRow<'_> {
    const HEADERS: &'static [&'static str] = &[
        "Date",
        "Type",
        "Description",
        "Category",
        "Amount",
        "Status",
    ];
}

fn write_rows<W, T, I>(writer: W, rows: I) -> DollaResult<()>
where
    W: Write,
    T: CsvRow,
    I: IntoIterator<Item = T>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(T::HEADERS)?;
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export incomes to CSV
pub fn export_incomes_csv<W: Write>(incomes: &[Income], writer: W) -> DollaResult<()> {
    write_rows(
        writer,
        incomes.iter().map(|i| IncomeRow {
            date: &i.date,
            source: &i.source,
            category: i.category.as_str(),
            description: &i.description,
            payment_method: &i.payment_method,
            amount: i.amount.to_string(),
            currency: i.currency.code(),
            status: i.status.to_string(),
        }),
    )
}

/// Export expenses to CSV
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> DollaResult<()> {
    write_rows(
        writer,
        expenses.iter().map(|e| ExpenseRow {
            date: &e.date,
            merchant: &e.merchant,
            category: e.category.as_str(),
            description: &e.description,
            payment_method: &e.payment_method,
            amount: e.amount.to_string(),
            status: e.status.to_string(),
        }),
    )
}

/// Export accounts to CSV
pub fn export_accounts_csv<W: Write>(accounts: &[Account], writer: W) -> DollaResult<()> {
    write_rows(
        writer,
        accounts.iter().map(|a| AccountRow {
            name: &a.name,
            account_type: &a.account_type,
            balance: a.balance.to_string(),
            currency: a.currency.code(),
            description: a.description.as_deref().unwrap_or(""),
            created_date: a
                .date_created
                .map(|d| d.date_naive().to_string())
                .unwrap_or_default(),
        }),
    )
}

/// Export budget progress to CSV
pub fn export_budgets_csv<W: Write>(progress: &[BudgetProgress], writer: W) -> DollaResult<()> {
    write_rows(
        writer,
        progress.iter().map(|p| BudgetRow {
            month: p.budget.month.to_string(),
            category: p.budget.category.as_str(),
            budget: p.budget.budget_amount.to_string(),
            spent: p.status.spent_amount.to_string(),
            remaining: p.status.remaining_amount.to_string(),
            percentage_used: format!("{:.1}", p.status.percentage_used),
            status: p.health.label(),
        }),
    )
}

/// Export the recent transactions feed to CSV
pub fn export_feed_csv<W: Write>(feed: &[RecentTransaction], writer: W) -> DollaResult<()> {
    write_rows(
        writer,
        feed.iter().map(|t| FeedRow {
            date: t.date.to_string(),
            kind: t.kind.to_string(),
            description: &t.description,
            category: t.category.as_str(),
            amount: t.amount.to_string(),
            status: t.status.to_string(),
        }),
    )
}
