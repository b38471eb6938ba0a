//! Cash flow chart
//!
//! Daily income and expense series for the interactive area chart.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::diagnostics::Checked;
use crate::models::{Expense, Income, Money};
use crate::services::{cash_flow_by, CashFlowPoint};

/// Window of days shown by the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChartRange {
    #[default]
    #[serde(rename = "90d")]
    Days90,
    #[serde(rename = "30d")]
    Days30,
    #[serde(rename = "7d")]
    Days7,
}

impl ChartRange {
    pub fn days(&self) -> i64 {
        match self {
            Self::Days90 => 90,
            Self::Days30 => 30,
            Self::Days7 => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Days90 => "90d",
            Self::Days30 => "30d",
            Self::Days7 => "7d",
        }
    }

    /// Parse "90d", "30d" or "7d"
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "90d" | "90" => Some(Self::Days90),
            "30d" | "30" => Some(Self::Days30),
            "7d" | "7" => Some(Self::Days7),
            _ => None,
        }
    }

    /// Inclusive first day of the window ending at `reference`
    pub fn start_date(&self, reference: NaiveDate) -> NaiveDate {
        reference - Duration::days(self.days() - 1)
    }
}

impl fmt::Display for ChartRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid chart range: {} (expected 90d, 30d or 7d)", s))
    }
}

/// Daily series over a chart window
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowReport {
    pub range: ChartRange,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// One point per day, oldest first; days without records are zero
    pub points: Vec<CashFlowPoint<NaiveDate>>,
    pub total_income: Money,
    pub total_expenses: Money,
}

impl CashFlowReport {
    /// Build the series for the `range` days ending at `reference_date`
    pub fn generate(
        incomes: &[Income],
        expenses: &[Expense],
        range: ChartRange,
        reference_date: NaiveDate,
    ) -> Checked<Self> {
        let start_date = range.start_date(reference_date);

        cash_flow_by(incomes, expenses, |date| date).map(|points| {
            let mut by_day: BTreeMap<NaiveDate, CashFlowPoint<NaiveDate>> = points
                .into_iter()
                .filter(|p| p.period >= start_date && p.period <= reference_date)
                .map(|p| (p.period, p))
                .collect();

            for day in start_date.iter_days().take_while(|d| *d <= reference_date) {
                by_day.entry(day).or_insert(CashFlowPoint {
                    period: day,
                    income: Money::zero(),
                    expenses: Money::zero(),
                });
            }

            let points: Vec<_> = by_day.into_values().collect();
            let total_income = points.iter().map(|p| p.income).sum();
            let total_expenses = points.iter().map(|p| p.expenses).sum();

            Self {
                range,
                start_date,
                end_date: reference_date,
                points,
                total_income,
                total_expenses,
            }
        })
    }

    /// Income minus expenses over the window
    pub fn net(&self) -> Money {
        self.total_income - self.total_expenses
    }
}
