//! Master credential storage and verification.
//!
//! The master file holds a 16-byte salt and the raw 32-byte digest of
//! `password ++ salt`. Every sensitive CLI operation verifies the master
//! password against this file before touching the accounts store.

use std::path::{Path, PathBuf};

use crate::crypto::{generate_salt, hash_with_salt, verify};
use crate::errors::{PassVaultError, Result};

use super::format;

/// File name of the master credential inside the vault directory.
pub const MASTER_FILE: &str = "master.dat";

/// Handle to the master credential file.
pub struct MasterStore {
    path: PathBuf,
}

impl MasterStore {
    /// Point at the master file inside `vault_dir`. Does not touch disk.
    pub fn new(vault_dir: &Path) -> Self {
        Self {
            path: vault_dir.join(MASTER_FILE),
        }
    }

    /// Returns `true` if a master password has been set.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Set the master password, generating a fresh salt.
    ///
    /// A new salt is drawn on every call — including rotation — so a
    /// repeated password never reuses an old salt.
    pub fn set(&self, password: &[u8]) -> Result<()> {
        let salt = generate_salt();
        let digest = hash_with_salt(password, &salt)?;
        format::write_master(&self.path, &salt, &digest)
    }

    /// Check `password` against the stored salt + digest.
    ///
    /// Returns `MasterNotSet` when no master file exists.
    pub fn verify(&self, password: &[u8]) -> Result<bool> {
        if !self.exists() {
            return Err(PassVaultError::MasterNotSet);
        }
        let (salt, digest) = format::read_master(&self.path)?;
        verify(password, &salt, &digest)
    }

    /// Rotate the master password after verifying the current one.
    pub fn change(&self, current: &[u8], new: &[u8]) -> Result<()> {
        if !self.verify(current)? {
            return Err(PassVaultError::MasterMismatch);
        }
        self.set(new)
    }

    /// Path to the master file on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
