//! Account CRUD over the flat accounts file.
//!
//! `AccountStore` loads the whole file into memory, mutates the in-memory
//! list, and writes the file back atomically on `save`. Service-name
//! matching is case-insensitive throughout, matching the original file
//! format's lookup semantics.

use std::path::{Path, PathBuf};

use crate::crypto::{generate_salt, hash_with_salt_hex};
use crate::errors::{PassVaultError, Result};

use super::account::Account;
use super::format::{self, MAX_FIELD_LEN};

/// File name of the accounts store inside the vault directory.
pub const ACCOUNTS_FILE: &str = "accounts.dat";

/// Handle to the accounts file plus its in-memory records.
pub struct AccountStore {
    path: PathBuf,
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Open the accounts file inside `vault_dir`.
    ///
    /// A missing file is not an error — it loads as an empty store, the
    /// same way the first `add` sees no prior records.
    pub fn open(vault_dir: &Path) -> Result<Self> {
        let path = vault_dir.join(ACCOUNTS_FILE);
        let accounts = if path.exists() {
            format::read_accounts(&path)?
        } else {
            Vec::new()
        };
        Ok(Self { path, accounts })
    }

    /// Append a new account, hashing `password` with a fresh salt.
    ///
    /// The plaintext password is consumed here and never stored.
    pub fn add(&mut self, service: &str, username: &str, password: &[u8]) -> Result<()> {
        check_field("service", service)?;
        check_field("username", username)?;

        let salt = generate_salt();
        let digest_hex = hash_with_salt_hex(password, &salt)?;

        self.accounts.push(Account {
            service: service.to_string(),
            username: username.to_string(),
            digest_hex,
            salt,
        });
        Ok(())
    }

    /// All records, in file order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// All records whose service name matches `service`, ignoring case.
    pub fn find(&self, service: &str) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|a| a.service.eq_ignore_ascii_case(service))
            .collect()
    }

    /// Remove every record matching `service` (ignoring case).
    ///
    /// Returns the number of records removed; zero matches is
    /// `AccountNotFound`.
    pub fn remove(&mut self, service: &str) -> Result<usize> {
        let before = self.accounts.len();
        self.accounts
            .retain(|a| !a.service.eq_ignore_ascii_case(service));
        let removed = before - self.accounts.len();
        if removed == 0 {
            return Err(PassVaultError::AccountNotFound(service.to_string()));
        }
        Ok(removed)
    }

    /// Write the current records back to disk atomically.
    pub fn save(&self) -> Result<()> {
        format::write_accounts(&self.path, &self.accounts)
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

fn check_field(field: &'static str, value: &str) -> Result<()> {
    if value.len() > MAX_FIELD_LEN {
        return Err(PassVaultError::FieldTooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{decode_hex, verify};
    use tempfile::tempdir;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempdir().unwrap();
        let store = AccountStore::open(dir.path()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn add_save_reload() {
        let dir = tempdir().unwrap();

        let mut store = AccountStore::open(dir.path()).unwrap();
        store.add("GitHub", "alice", b"s3cret").unwrap();
        store.add("gmail", "bob", b"hunter2").unwrap();
        store.save().unwrap();

        let reloaded = AccountStore::open(dir.path()).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.accounts()[0].service, "GitHub");

        // The stored digest verifies against the original password.
        let account = &reloaded.accounts()[1];
        let digest = decode_hex(&account.digest_hex).unwrap();
        assert!(verify(b"hunter2", &account.salt, &digest).unwrap());
        assert!(!verify(b"wrong", &account.salt, &digest).unwrap());
    }

    #[test]
    fn find_is_case_insensitive() {
        let dir = tempdir().unwrap();
        let mut store = AccountStore::open(dir.path()).unwrap();
        store.add("GitHub", "alice", b"pw").unwrap();
        store.add("github", "bob", b"pw").unwrap();
        store.add("gmail", "carol", b"pw").unwrap();

        let matches = store.find("GITHUB");
        assert_eq!(matches.len(), 2);
        assert!(store.find("missing").is_empty());
    }

    #[test]
    fn remove_reports_count() {
        let dir = tempdir().unwrap();
        let mut store = AccountStore::open(dir.path()).unwrap();
        store.add("GitHub", "alice", b"pw").unwrap();
        store.add("github", "bob", b"pw").unwrap();

        assert_eq!(store.remove("GitHub").unwrap(), 2);
        assert!(store.is_empty());
        assert!(matches!(
            store.remove("GitHub"),
            Err(PassVaultError::AccountNotFound(_))
        ));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        let dir = tempdir().unwrap();
        let mut store = AccountStore::open(dir.path()).unwrap();
        store.add("a", "u", b"same").unwrap();
        store.add("b", "u", b"same").unwrap();

        let [first, second] = store.accounts() else {
            panic!("expected two accounts");
        };
        assert_ne!(first.salt, second.salt);
        assert_ne!(first.digest_hex, second.digest_hex);
    }
}
