//! Account CLI commands
//!
//! Balances are shown as the backend reports them.

use clap::Args;

use super::Workspace;
use crate::display::{format_account_details, format_account_list};
use crate::error::DollaResult;
use crate::reports::{find_account, AccountsSummary};

/// Accounts arguments
#[derive(Args, Debug)]
pub struct AccountsArgs {
    /// Show one account by ID or name
    pub account: Option<String>,
}

/// Handle the accounts command
pub fn handle_accounts_command(workspace: &Workspace, args: AccountsArgs) -> DollaResult<()> {
    let accounts = &workspace.snapshot.accounts;
    let currency = workspace.settings.currency;

    match args.account {
        Some(identifier) => {
            let account = find_account(accounts, &identifier)?;
            print!("{}", format_account_details(account));
        }
        None => {
            let summary = AccountsSummary::generate(accounts);
            print!("{}", summary.format_terminal(currency));
            println!("{}", format_account_list(accounts, currency));
        }
    }

    workspace.report_skipped(workspace.diagnostics());
    Ok(())
}
