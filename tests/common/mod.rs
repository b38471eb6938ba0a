//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// March 2025 against February, with one malformed expense and one canceled income
pub const SNAPSHOT: &str = r#"{
    "incomes": [
        {"id": "i-1", "date": "2025-03-01", "amount": 1000, "category": "salary / wages", "source": "Acme", "status": "reconciled"},
        {"id": "i-2", "date": "2025-02-10", "amount": 800, "category": "salary / wages", "source": "Acme"},
        {"id": "i-3", "date": "2025-03-15", "amount": 200, "category": "freelance / gig work", "source": "Upwork", "status": "canceled"}
    ],
    "expenses": [
        {"id": "e-1", "date": "2025-03-02", "amount": 250, "category": "groceries", "merchant": "Naivas"},
        {"id": "e-2", "date": "2025-03-05", "amount": "abc", "category": "transport", "merchant": "Bolt"},
        {"id": "e-3", "date": "2025-02-20", "amount": 100, "category": "transport", "merchant": "Matatu"},
        {"id": "e-4", "date": "2025-03-10", "amount": 50, "category": "transport", "merchant": "Uber"}
    ],
    "budgets": [
        {"id": "b-1", "month": "2025-03", "category": "groceries", "budgetAmount": 200},
        {"id": "b-2", "month": "2025-03", "category": "transport", "budgetAmount": 1000}
    ],
    "accounts": [
        {"id": "a-1", "name": "Equity", "accountType": "bank", "balance": 1500.5},
        {"id": "a-2", "name": "M-Pesa", "accountType": "mobile money", "balance": -20}
    ]
}"#;

/// Write `contents` to a temporary snapshot file
pub fn snapshot_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write snapshot");
    file
}
