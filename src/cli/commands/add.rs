//! `passvault add` — add an account record (master-gated).

use crate::cli::output;
use crate::cli::{prompt_new_password, require_master, vault_dir, Cli};
use crate::errors::Result;
use crate::store::AccountStore;

/// Execute the `add` command.
pub fn execute(cli: &Cli, service: &str, username: &str) -> Result<()> {
    require_master(cli)?;

    // Prompt for the account password; it is hashed with a fresh salt and
    // the plaintext never touches disk.
    let password = prompt_new_password(&format!("Password for '{service}'"))?;

    let mut store = AccountStore::open(&vault_dir(cli)?)?;
    store.add(service, username, password.as_bytes())?;
    store.save()?;

    output::success(&format!("Account saved for '{service}'"));
    Ok(())
}
