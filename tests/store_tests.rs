//! Integration tests for the flat-file store layer.

use std::fs;

use passvault::crypto::{decode_hex, verify, DIGEST_LEN, SALT_LEN};
use passvault::errors::PassVaultError;
use passvault::store::format::{MASTER_LEN, RECORD_LEN};
use passvault::store::{AccountStore, MasterStore, ACCOUNTS_FILE, MASTER_FILE};
use tempfile::tempdir;

// ---------------------------------------------------------------------------
// Master file
// ---------------------------------------------------------------------------

#[test]
fn master_file_is_salt_then_raw_digest() {
    let dir = tempdir().unwrap();
    let master = MasterStore::new(dir.path());
    master.set(b"hunter2").unwrap();

    let bytes = fs::read(dir.path().join(MASTER_FILE)).unwrap();
    assert_eq!(bytes.len(), MASTER_LEN);

    // The digest portion must verify against the salt portion.
    let salt = &bytes[..SALT_LEN];
    let digest: [u8; DIGEST_LEN] = bytes[SALT_LEN..].try_into().unwrap();
    assert!(verify(b"hunter2", salt, &digest).unwrap());
}

#[test]
fn truncated_master_file_is_rejected() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(MASTER_FILE), [0u8; 20]).unwrap();

    let master = MasterStore::new(dir.path());
    assert!(matches!(
        master.verify(b"anything"),
        Err(PassVaultError::InvalidFileFormat(_))
    ));
}

// ---------------------------------------------------------------------------
// Accounts file
// ---------------------------------------------------------------------------

#[test]
fn accounts_file_layout() {
    let dir = tempdir().unwrap();
    let mut store = AccountStore::open(dir.path()).unwrap();
    store.add("gmail", "alice", b"pw1").unwrap();
    store.add("github", "bob", b"pw2").unwrap();
    store.save().unwrap();

    let bytes = fs::read(dir.path().join(ACCOUNTS_FILE)).unwrap();
    // u32 LE count prefix, then two fixed-size records.
    assert_eq!(bytes.len(), 4 + 2 * RECORD_LEN);
    assert_eq!(u32::from_le_bytes(bytes[..4].try_into().unwrap()), 2);
}

#[test]
fn accounts_round_trip_preserves_verification() {
    let dir = tempdir().unwrap();

    {
        let mut store = AccountStore::open(dir.path()).unwrap();
        store.add("gmail", "alice", b"hunter2").unwrap();
        store.save().unwrap();
    }

    let store = AccountStore::open(dir.path()).unwrap();
    let matches = store.find("GMAIL");
    assert_eq!(matches.len(), 1);

    let account = matches[0];
    assert_eq!(account.username, "alice");
    let digest = decode_hex(&account.digest_hex).unwrap();
    assert!(verify(b"hunter2", &account.salt, &digest).unwrap());
}

#[test]
fn remove_then_reload() {
    let dir = tempdir().unwrap();

    let mut store = AccountStore::open(dir.path()).unwrap();
    store.add("gmail", "alice", b"pw").unwrap();
    store.add("github", "bob", b"pw").unwrap();
    store.save().unwrap();

    assert_eq!(store.remove("gmail").unwrap(), 1);
    store.save().unwrap();

    let reloaded = AccountStore::open(dir.path()).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.accounts()[0].service, "github");
}

#[test]
fn truncated_accounts_file_is_rejected() {
    let dir = tempdir().unwrap();

    let mut store = AccountStore::open(dir.path()).unwrap();
    store.add("gmail", "alice", b"pw").unwrap();
    store.save().unwrap();

    // Chop off the last 10 bytes: count no longer matches the body.
    let path = dir.path().join(ACCOUNTS_FILE);
    let mut bytes = fs::read(&path).unwrap();
    bytes.truncate(bytes.len() - 10);
    fs::write(&path, bytes).unwrap();

    assert!(matches!(
        AccountStore::open(dir.path()),
        Err(PassVaultError::InvalidFileFormat(_))
    ));
}

#[test]
fn overlong_fields_rejected_at_add() {
    let dir = tempdir().unwrap();
    let mut store = AccountStore::open(dir.path()).unwrap();

    let long = "x".repeat(100);
    assert!(matches!(
        store.add(&long, "user", b"pw"),
        Err(PassVaultError::FieldTooLong { field: "service", .. })
    ));
    assert!(matches!(
        store.add("svc", &long, b"pw"),
        Err(PassVaultError::FieldTooLong { field: "username", .. })
    ));

    // 99 bytes is the maximum and must succeed.
    let max = "y".repeat(99);
    store.add(&max, &max, b"pw").unwrap();
    store.save().unwrap();
}
