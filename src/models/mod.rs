//! Core data models for Dolla
//!
//! Wire shapes of the records the backend hands out (incomes, expenses,
//! accounts, budgets) and the value types they are built from.

pub mod account;
pub mod budget;
pub mod category;
pub mod currency;
pub mod expense;
pub mod ids;
pub mod income;
pub mod money;
pub mod period;
pub mod record;

pub use account::{Account, AccountPatch};
pub use budget::{Budget, BudgetPatch};
pub use category::{Category, CategoryKind, CategoryParseError};
pub use currency::Currency;
pub use expense::{Expense, ExpensePatch};
pub use ids::{AccountId, BudgetId, ExpenseId, IncomeId};
pub use income::{Income, IncomePatch};
pub use money::{Money, MoneyParseError};
pub use period::{Month, PeriodParseError};
pub use record::{parse_record_date, MonetaryRecord, RawAmount, RecordStatus};
