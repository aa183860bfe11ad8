//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::errors::{PassVaultError, Result};
use crate::store::MasterStore;

/// PassVault CLI: local salted-hash credential vault.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Local salted-hash credential vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (default: .passvault)
    #[arg(long, default_value = ".passvault", global = true)]
    pub vault_dir: String,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Set the master password (only if none is set)
    Init,

    /// Check the master password
    Verify,

    /// Add an account (master-gated)
    Add {
        /// Service name (e.g. gmail)
        service: String,
        /// Username for the service
        username: String,
    },

    /// List all stored accounts (master-gated)
    List,

    /// Find accounts by service name (master-gated)
    Find {
        /// Service name to search for (case-insensitive)
        service: String,
    },

    /// Remove accounts by service name (master-gated)
    Remove {
        /// Service name to remove (case-insensitive)
        service: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Change the master password
    ChangeMaster,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the master password, trying in order:
/// 1. `PASSVAULT_PASSWORD` env var (scripting/CI)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password(prompt: &str) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new password with confirmation (used by `init` and
/// `change-master`). Empty passwords are rejected.
///
/// Also respects `PASSVAULT_PASSWORD` for scripted usage.
pub fn prompt_new_password(prompt: &str) -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("PASSVAULT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let password = dialoguer::Password::new()
            .with_prompt(prompt)
            .with_confirmation("Confirm password", "Passwords do not match, try again")
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))?;

        if password.is_empty() {
            output::warning("Empty password not allowed. Try again.");
            continue;
        }

        return Ok(Zeroizing::new(password));
    }
}

/// Prompt for the master password and verify it against the master file.
///
/// Every sensitive command calls this before touching the accounts store.
pub fn require_master(cli: &Cli) -> Result<()> {
    let master = MasterStore::new(&vault_dir(cli)?);
    let password = prompt_password("Enter master password")?;
    if !master.verify(password.as_bytes())? {
        return Err(PassVaultError::MasterMismatch);
    }
    Ok(())
}

/// Build the full path to the vault directory from the CLI arguments.
pub fn vault_dir(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(&cli.vault_dir))
}
