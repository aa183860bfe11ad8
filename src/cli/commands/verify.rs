//! `passvault verify` — check the master password.

use crate::cli::output;
use crate::cli::{prompt_password, vault_dir, Cli};
use crate::errors::{PassVaultError, Result};
use crate::store::MasterStore;

/// Execute the `verify` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let master = MasterStore::new(&vault_dir(cli)?);

    let password = prompt_password("Enter master password")?;
    if !master.verify(password.as_bytes())? {
        return Err(PassVaultError::MasterMismatch);
    }

    output::success("Master password OK.");
    Ok(())
}
