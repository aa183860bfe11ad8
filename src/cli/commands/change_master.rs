//! `passvault change-master` — rotate the master password.
//!
//! Verifies the current master password first, then stores the new one
//! with a freshly generated salt. Account records are unaffected: they
//! carry their own salts and digests.

use crate::cli::output;
use crate::cli::{prompt_new_password, prompt_password, vault_dir, Cli};
use crate::errors::{PassVaultError, Result};
use crate::store::MasterStore;

/// Execute the `change-master` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let master = MasterStore::new(&vault_dir(cli)?);

    // 1. Verify the current master password.
    output::info("Enter your current master password.");
    let current = prompt_password("Current master password")?;
    if !master.verify(current.as_bytes())? {
        return Err(PassVaultError::MasterMismatch);
    }

    // 2. Prompt for the new password (with confirmation) and save it with
    //    a fresh salt.
    output::info("Choose your new master password.");
    let new = prompt_new_password("New master password")?;
    master.set(new.as_bytes())?;

    output::success("Master password changed.");
    Ok(())
}
