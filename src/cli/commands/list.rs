//! `passvault list` — print a table of all accounts (master-gated).

use crate::cli::output;
use crate::cli::{require_master, vault_dir, Cli};
use crate::errors::Result;
use crate::store::AccountStore;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    require_master(cli)?;

    let store = AccountStore::open(&vault_dir(cli)?)?;
    output::print_accounts_table(store.accounts());
    Ok(())
}
