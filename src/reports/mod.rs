//! Reports module for Dolla
//!
//! View models composed from the aggregation engine: dashboard cards,
//! budget summary and alerts, accounts overview and the cash flow chart.

pub mod accounts_summary;
pub mod budget_alerts;
pub mod budget_summary;
pub mod cash_flow;
pub mod dashboard;

pub use accounts_summary::{find_account, AccountsSummary};
pub use budget_alerts::BudgetAlerts;
pub use budget_summary::{month_budgets, summarize_month, BudgetSummary, MonthBudgets};
pub use cash_flow::{CashFlowReport, ChartRange};
pub use dashboard::{DashboardTotals, MonthlyMetrics};
