//! Data-quality diagnostics
//!
//! Aggregations never fail because one record is malformed. The record is
//! left out of the result and described here instead, so callers can show a
//! "N records skipped" notice or inspect the details.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// What was wrong with a skipped record
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Anomaly {
    #[error("unparseable date '{value}'")]
    UnparseableDate { value: String },

    #[error("non-numeric amount '{value}'")]
    NonNumericAmount { value: String },

    #[error("amount is not a finite number")]
    NonFiniteAmount,

    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("invalid record: {reason}")]
    InvalidRecord { reason: String },

    #[error("amount pushes the running total out of range")]
    TotalOutOfRange,
}

/// One record left out of an aggregate
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRecord {
    /// "income", "expense", "budget", "account" or "metric"
    pub record_kind: &'static str,
    pub record_id: Option<String>,
    pub anomaly: Anomaly,
}

impl fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.record_id {
            Some(id) => write!(f, "{} {}: {}", self.record_kind, id, self.anomaly),
            None => write!(f, "{}: {}", self.record_kind, self.anomaly),
        }
    }
}

/// Ordered collection of skipped records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<SkippedRecord>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a skipped item and log it
    pub fn skip(&mut self, record_kind: &'static str, record_id: Option<&str>, anomaly: Anomaly) {
        tracing::warn!(
            record_kind,
            record_id = record_id.unwrap_or("<none>"),
            %anomaly,
            "skipping record"
        );
        self.0.push(SkippedRecord {
            record_kind,
            record_id: record_id.map(str::to_string),
            anomaly,
        });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SkippedRecord> {
        self.0.iter()
    }

    /// Append another set of diagnostics, keeping order
    pub fn merge(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    /// Drop repeated entries, keeping the first occurrence
    ///
    /// Several aggregations over the same records report the same problem;
    /// a combined report should list it once.
    pub fn dedup(&mut self) {
        let mut seen: Vec<SkippedRecord> = Vec::with_capacity(self.0.len());
        self.0.retain(|entry| {
            if seen.contains(entry) {
                false
            } else {
                seen.push(entry.clone());
                true
            }
        });
    }

    /// Check whether a given record was skipped
    pub fn contains_record(&self, record_id: &str) -> bool {
        self.0
            .iter()
            .any(|s| s.record_id.as_deref() == Some(record_id))
    }
}

impl IntoIterator for Diagnostics {
    type Item = SkippedRecord;
    type IntoIter = std::vec::IntoIter<SkippedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a SkippedRecord;
    type IntoIter = std::slice::Iter<'a, SkippedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A computed value together with the records that were left out of it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Checked<T> {
    pub value: T,
    pub diagnostics: Diagnostics,
}

impl<T> Checked<T> {
    pub fn new(value: T, diagnostics: Diagnostics) -> Self {
        Self { value, diagnostics }
    }

    /// A value computed without skipping anything
    pub fn clean(value: T) -> Self {
        Self::new(value, Diagnostics::new())
    }

    /// Number of records left out
    pub fn skipped(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Checked<U> {
        Checked::new(f(self.value), self.diagnostics)
    }

    /// Move the diagnostics into `sink` and return the value
    pub fn drain_into(self, sink: &mut Diagnostics) -> T {
        sink.merge(self.diagnostics);
        self.value
    }

    pub fn into_parts(self) -> (T, Diagnostics) {
        (self.value, self.diagnostics)
    }
}
