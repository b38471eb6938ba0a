//! Dolla - financial aggregation engine for a personal-finance dashboard
//!
//! This library turns snapshots of a finance backend (incomes, expenses,
//! accounts and monthly budgets) into the read-only view models a dashboard
//! shows: headline totals with month-over-month trends, budget progress and
//! alerts, a merged recent-transactions feed, account balances and cash flow
//! series.
//!
//! Every aggregation is a pure function over borrowed slices. Malformed
//! records never abort a computation; they are left out and reported in a
//! [`diagnostics::Diagnostics`] list next to the result.
//!
//! # Architecture
//!
//! - `models`: Wire shapes and value types (money, months, categories)
//! - `services`: The aggregation engine (bucketing, budget status, trends, feed)
//! - `reports`: View models composed from the engine
//! - `snapshot`: Lenient intake of backend JSON
//! - `export`: CSV, JSON and YAML output
//! - `display`: Terminal tables
//! - `config`: Paths and user settings
//! - `diagnostics`: Skipped-record reporting
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use dolla::models::{Budget, Category, Expense, Money, Month};
//! use dolla::services::{recalculate_month, BudgetHealth};
//!
//! let march = Month::new(2025, 3).unwrap();
//! let budgets = vec![Budget::new("b-1", march, Category::Groceries, Money::from_cents(100_000))];
//! let expenses = vec![Expense::new("e-1", "2025-03-04", 850.0, Category::Groceries, "Naivas")];
//!
//! let progress = recalculate_month(&budgets, &expenses, march).unwrap();
//! assert_eq!(progress.value[0].status.percentage_used, 85.0);
//! assert_eq!(progress.value[0].health, BudgetHealth::Warning);
//! ```

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod snapshot;

pub use diagnostics::{Checked, Diagnostics};
pub use error::{DollaError, DollaResult};
pub use snapshot::Snapshot;
