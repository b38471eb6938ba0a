//! Snapshot intake
//!
//! A snapshot is whatever the caller fetched from the backend: a JSON object
//! whose `incomes`, `expenses`, `budgets` and `accounts` keys hold arrays. A
//! paginated list response (`{offset, limit, total, incomes: [...]}`) is a
//! valid snapshot on its own, and several pages can be merged.
//!
//! Elements are read one at a time so that a single bad record is skipped
//! and reported instead of rejecting the file.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::diagnostics::{Anomaly, Checked, Diagnostics};
use crate::error::{DollaError, DollaResult};
use crate::models::{Account, Budget, Expense, Income};

/// Records available to the engine
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub incomes: Vec<Income>,
    pub expenses: Vec<Expense>,
    pub budgets: Vec<Budget>,
    pub accounts: Vec<Account>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot document
    ///
    /// Fails only if the document is not a JSON object or a known key holds
    /// something other than an array.
    pub fn from_json_str(json: &str) -> DollaResult<Checked<Self>> {
        let root: Value = serde_json::from_str(json)
            .map_err(|e| DollaError::Snapshot(format!("invalid JSON: {}", e)))?;
        Self::from_value(root)
    }

    pub fn from_value(root: Value) -> DollaResult<Checked<Self>> {
        let Value::Object(mut root) = root else {
            return Err(DollaError::Snapshot(
                "expected a JSON object at the top level".into(),
            ));
        };

        let mut diagnostics = Diagnostics::new();
        let snapshot = Self {
            incomes: read_array(&mut root, "incomes", "income", &mut diagnostics)?,
            expenses: read_array(&mut root, "expenses", "expense", &mut diagnostics)?,
            budgets: read_array(&mut root, "budgets", "budget", &mut diagnostics)?,
            accounts: read_array(&mut root, "accounts", "account", &mut diagnostics)?,
        };

        tracing::debug!(
            incomes = snapshot.incomes.len(),
            expenses = snapshot.expenses.len(),
            budgets = snapshot.budgets.len(),
            accounts = snapshot.accounts.len(),
            skipped = diagnostics.len(),
            "parsed snapshot"
        );

        Ok(Checked::new(snapshot, diagnostics))
    }

    /// Read a snapshot file
    pub fn load(path: &Path) -> DollaResult<Checked<Self>> {
        let contents = fs::read_to_string(path)
            .map_err(|e| DollaError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json_str(&contents).map_err(|e| match e {
            DollaError::Snapshot(msg) => {
                DollaError::Snapshot(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Read and merge several snapshot files, in order
    pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> DollaResult<Checked<Self>> {
        let mut merged = Self::new();
        let mut diagnostics = Diagnostics::new();
        for path in paths {
            let page = Self::load(path.as_ref())?.drain_into(&mut diagnostics);
            merged.extend(page);
        }
        Ok(Checked::new(merged, diagnostics))
    }

    /// Append another page of records
    pub fn extend(&mut self, other: Snapshot) {
        self.incomes.extend(other.incomes);
        self.expenses.extend(other.expenses);
        self.budgets.extend(other.budgets);
        self.accounts.extend(other.accounts);
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty()
            && self.expenses.is_empty()
            && self.budgets.is_empty()
            && self.accounts.is_empty()
    }
}

fn read_array<T: DeserializeOwned>(
    root: &mut Map<String, Value>,
    key: &str,
    record_kind: &'static str,
    diagnostics: &mut Diagnostics,
) -> DollaResult<Vec<T>> {
    let elements = match root.remove(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(elements)) => elements,
        Some(_) => {
            return Err(DollaError::Snapshot(format!(
                "'{}' must be an array",
                key
            )))
        }
    };

    let mut records = Vec::with_capacity(elements.len());
    for element in elements {
        let id = element
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string);
        match serde_json::from_value::<T>(element) {
            Ok(record) => records.push(record),
            Err(e) => diagnostics.skip(
                record_kind,
                id.as_deref(),
                Anomaly::InvalidRecord {
                    reason: e.to_string(),
                },
            ),
        }
    }
    Ok(records)
}
