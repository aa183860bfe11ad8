//! `passvault remove` — delete accounts by service name (master-gated).

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{require_master, vault_dir, Cli};
use crate::errors::{PassVaultError, Result};
use crate::store::AccountStore;

/// Execute the `remove` command.
pub fn execute(cli: &Cli, service: &str, force: bool) -> Result<()> {
    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove all accounts for '{service}'?"))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    require_master(cli)?;

    let mut store = AccountStore::open(&vault_dir(cli)?)?;
    let removed = store.remove(service)?;
    store.save()?;

    output::success(&format!(
        "Removed {removed} account(s) for '{service}'"
    ));
    Ok(())
}
