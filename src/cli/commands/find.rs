//! `passvault find` — search accounts by service name (master-gated).

use crate::cli::output;
use crate::cli::{require_master, vault_dir, Cli};
use crate::errors::{PassVaultError, Result};
use crate::store::AccountStore;

/// Execute the `find` command.
pub fn execute(cli: &Cli, service: &str) -> Result<()> {
    require_master(cli)?;

    let store = AccountStore::open(&vault_dir(cli)?)?;
    let matches = store.find(service);
    if matches.is_empty() {
        return Err(PassVaultError::AccountNotFound(service.to_string()));
    }

    let matches: Vec<_> = matches.into_iter().cloned().collect();
    output::print_accounts_table(&matches);
    Ok(())
}
