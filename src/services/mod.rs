//! Financial aggregation engine
//!
//! Pure functions over borrowed record slices. Each aggregation returns its
//! result together with the records it had to leave out.

pub mod budget_status;
pub mod bucketing;
pub mod feed;
pub mod trend;

pub use bucketing::{bucket_by, cash_flow_by, sum_by_day, sum_by_month, total, CashFlowPoint};
pub use budget_status::{
    calculate_budget_status, recalculate_month, recalculate_month_with, AlertThresholds,
    BudgetHealth, BudgetProgress, BudgetStatus,
};
pub use feed::{merge_recent, RecentTransaction, TransactionKind};
pub use trend::{checked_percent_change, money_change, percent_change, Direction, Trend};
