//! Account display formatting
//!
//! Formats accounts for terminal output in table and detail views.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Account, Currency, Money};

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    account_type: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Format a list of accounts with a total row
pub fn format_account_list(accounts: &[Account], currency: Currency) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let total: Money = accounts.iter().map(|a| a.balance).sum();
    let mut rows: Vec<AccountRow> = accounts
        .iter()
        .map(|a| AccountRow {
            name: a.name.clone(),
            account_type: a.account_type.clone(),
            balance: a.balance.format_with_currency(a.currency),
        })
        .collect();
    rows.push(AccountRow {
        name: "TOTAL".to_string(),
        account_type: String::new(),
        balance: total.format_with_currency(currency),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format a single account's details
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();

    output.push_str(&format!("Account: {}\n", account.name));
    output.push_str(&format!("  ID:             {}\n", account.id));
    output.push_str(&format!("  Type:           {}\n", account.account_type));
    output.push_str(&format!(
        "  Balance:        {}\n",
        account.balance.format_with_currency(account.currency)
    ));
    if let Some(description) = &account.description {
        output.push_str(&format!("  Description:    {}\n", description));
    }
    if let Some(created) = account.date_created {
        output.push_str(&format!("  Created:        {}\n", created.date_naive()));
    }

    output
}
