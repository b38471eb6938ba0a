//! Period-over-period change
//!
//! A change against a zero previous value is reported as 0%, never as an
//! infinity or NaN.

use serde::Serialize;
use std::fmt;

use crate::diagnostics::{Anomaly, Checked, Diagnostics};
use crate::models::Money;

/// Percentage change from `previous` to `current`
///
/// Relative to the magnitude of `previous`, so a move from -50 to 100 is
/// +300%.
///
/// # Examples
/// ```
/// use dolla::services::percent_change;
/// assert_eq!(percent_change(150.0, 100.0), 50.0);
/// assert_eq!(percent_change(100.0, -50.0), 300.0);
/// assert_eq!(percent_change(42.0, 0.0), 0.0);
/// ```
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) * 100.0 / previous.abs()
}

/// Like [`percent_change`], but NaN or infinite inputs are reported and
/// produce 0
pub fn checked_percent_change(current: f64, previous: f64) -> Checked<f64> {
    let mut diagnostics = Diagnostics::new();
    if !current.is_finite() || !previous.is_finite() {
        diagnostics.skip("metric", None, Anomaly::NonFiniteAmount);
        return Checked::new(0.0, diagnostics);
    }
    let change = percent_change(current, previous);
    if change.is_finite() {
        Checked::new(change, diagnostics)
    } else {
        diagnostics.skip("metric", None, Anomaly::NonFiniteAmount);
        Checked::new(0.0, diagnostics)
    }
}

/// Percentage change between two money amounts, computed on minor units
pub fn money_change(current: Money, previous: Money) -> f64 {
    percent_change(current.cents() as f64, previous.cents() as f64)
}

/// Sign of a value, used to colour balance cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

impl Trend {
    pub fn from_value(value: f64) -> Self {
        if value > 0.0 {
            Self::Positive
        } else if value < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn of_money(value: Money) -> Self {
        Self::from_value(value.cents() as f64)
    }
}

/// Direction of a percentage change, used for badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub fn of(percent: f64) -> Self {
        if percent > 0.0 {
            Self::Up
        } else if percent < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Flat => "→",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.arrow())
    }
}
