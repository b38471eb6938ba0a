//! Shared text helpers for the report views

use chrono::NaiveDate;
use std::fmt::Write;

use crate::services::Direction;

/// Pattern used when a configured date format cannot be rendered
pub const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

/// Render a percentage, with more decimals the closer it is to zero
pub fn format_percentage(pct: f64) -> String {
    let decimals = match pct.abs() {
        m if m == 0.0 || m >= 10.0 => 0,
        m if m < 0.1 => 2,
        _ => 1,
    };
    format!("{:.*}%", decimals, pct)
}

/// Render `date` with a strftime pattern, falling back to ISO dates when the
/// pattern has specifiers chrono does not know
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_ok() {
        return out;
    }
    tracing::debug!(pattern, "unrenderable date format, using ISO dates");
    date.format(FALLBACK_DATE_FORMAT).to_string()
}

/// Render a period-over-period change with its arrow, e.g. "↑ 12%"
pub fn format_change(pct: f64) -> String {
    format!("{} {}", Direction::of(pct), format_percentage(pct.abs()))
}

/// Horizontal bar of `width` cells, filled in proportion to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    let ratio = if max_value > 0.0 && value > 0.0 {
        (value / max_value).min(1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;

    std::iter::repeat(BAR_FILLED)
        .take(filled)
        .chain(std::iter::repeat(BAR_EMPTY).take(width - filled))
        .collect()
}

/// Shorten `s` to at most `max_chars` characters, ending in "…" when cut
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some(_) if max_chars == 0 => String::new(),
        Some(_) => {
            let mut cut: String = s.chars().take(max_chars - 1).collect();
            cut.push('…');
            cut
        }
    }
}
