//! Accounts summary
//!
//! Balance overview across all accounts. Balances come from the backend and
//! are summed as-is.

use serde::Serialize;

use crate::error::{DollaError, DollaResult};
use crate::models::{Account, Currency, Money};

/// Number of accounts shown in the top list
const TOP_ACCOUNTS: usize = 3;

/// Account balance overview
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountsSummary {
    pub total_accounts: usize,
    pub total_balance: Money,
    pub positive_accounts: usize,
    pub negative_accounts: usize,
    pub highest_balance: Option<Money>,
    pub lowest_balance: Option<Money>,
    /// Largest balances first
    pub top_accounts: Vec<Account>,
}

impl AccountsSummary {
    pub fn generate(accounts: &[Account]) -> Self {
        let mut by_balance: Vec<&Account> = accounts.iter().collect();
        by_balance.sort_by(|a, b| b.balance.cmp(&a.balance));

        Self {
            total_accounts: accounts.len(),
            total_balance: accounts.iter().map(|a| a.balance).sum(),
            positive_accounts: accounts.iter().filter(|a| a.balance.is_positive()).count(),
            negative_accounts: accounts.iter().filter(|a| a.balance.is_negative()).count(),
            highest_balance: accounts.iter().map(|a| a.balance).max(),
            lowest_balance: accounts.iter().map(|a| a.balance).min(),
            top_accounts: by_balance
                .into_iter()
                .take(TOP_ACCOUNTS)
                .cloned()
                .collect(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: Currency) -> String {
        let mut output = String::new();

        output.push_str("Accounts Summary\n");
        output.push_str(&"=".repeat(50));
        output.push('\n');
        output.push_str(&format!(
            "Total Balance:  {:>24}\n",
            self.total_balance.format_with_currency(currency)
        ));
        output.push_str(&format!(
            "Accounts:       {} ({} positive, {} negative)\n",
            self.total_accounts, self.positive_accounts, self.negative_accounts
        ));
        if let (Some(high), Some(low)) = (self.highest_balance, self.lowest_balance) {
            output.push_str(&format!(
                "Highest:        {:>24}\n",
                high.format_with_currency(currency)
            ));
            output.push_str(&format!(
                "Lowest:         {:>24}\n",
                low.format_with_currency(currency)
            ));
        }

        output
    }
}

/// Find an account by id or case-insensitive name
pub fn find_account<'a>(accounts: &'a [Account], identifier: &str) -> DollaResult<&'a Account> {
    accounts
        .iter()
        .find(|a| a.matches(identifier))
        .ok_or_else(|| DollaError::account_not_found(identifier))
}
