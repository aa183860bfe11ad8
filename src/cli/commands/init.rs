//! `passvault init` — set the master password for a new vault.

use std::fs;

use crate::cli::output;
use crate::cli::{prompt_new_password, vault_dir, Cli};
use crate::errors::{PassVaultError, Result};
use crate::store::MasterStore;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let dir = vault_dir(cli)?;

    // 1. Create the vault directory if it doesn't exist.
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
        let dir_display = dir.display();
        output::info(&format!("Created vault directory: {dir_display}"));
    }

    // 2. Refuse to overwrite an existing master credential.
    let master = MasterStore::new(&dir);
    if master.exists() {
        output::tip("Use `passvault change-master` to rotate the existing master password.");
        return Err(PassVaultError::MasterAlreadyExists(
            master.path().to_path_buf(),
        ));
    }

    // 3. Prompt for the master password (with confirmation) and save it.
    let password = prompt_new_password("Set master password")?;
    master.set(password.as_bytes())?;

    output::success(&format!(
        "Master password set and saved at {}",
        master.path().display()
    ));

    // 4. Show helpful tips.
    output::tip("Run `passvault add <SERVICE> <USERNAME>` to add an account.");
    output::tip("Run `passvault list` to see all accounts.");

    Ok(())
}
