//! Binary layout of the master and accounts files.
//!
//! The layout is inherited from the original flat-file format:
//!
//! ```text
//! master.dat:   [salt: 16 bytes][digest: 32 bytes raw]
//! accounts.dat: [count: 4 bytes LE][record]...[record]
//! record:       [service: 100 bytes][username: 100 bytes]
//!               [digest hex: 65 bytes][salt: 16 bytes]
//! ```
//!
//! String fields are NUL-padded; the digest field holds 64 hex characters
//! plus a NUL terminator. Service and username are capped at 99 bytes so a
//! terminator always fits. Writes are atomic (temp file + rename) so
//! readers never see a half-written file.

use std::fs;
use std::path::Path;

use crate::crypto::{decode_hex, DIGEST_LEN, SALT_LEN};
use crate::errors::{PassVaultError, Result};

use super::account::Account;

/// Size of the service field, including the NUL terminator byte.
pub const SERVICE_LEN: usize = 100;

/// Size of the username field, including the NUL terminator byte.
pub const USER_LEN: usize = 100;

/// Size of the digest field: 64 hex characters plus a NUL terminator.
pub const HASH_HEX_LEN: usize = 65;

/// Maximum length of service/username values (field size minus terminator).
pub const MAX_FIELD_LEN: usize = SERVICE_LEN - 1;

/// Total size of one account record on disk.
pub const RECORD_LEN: usize = SERVICE_LEN + USER_LEN + HASH_HEX_LEN + SALT_LEN;

/// Total size of the master file: raw salt followed by raw digest.
pub const MASTER_LEN: usize = SALT_LEN + DIGEST_LEN;

// ---------------------------------------------------------------------------
// Master file
// ---------------------------------------------------------------------------

/// Write the master credential file: 16-byte salt, then 32-byte raw digest.
pub fn write_master(path: &Path, salt: &[u8; SALT_LEN], digest: &[u8; DIGEST_LEN]) -> Result<()> {
    let mut buf = Vec::with_capacity(MASTER_LEN);
    buf.extend_from_slice(salt);
    buf.extend_from_slice(digest);
    atomic_write(path, &buf)
}

/// Read the master credential file back into its salt and digest.
pub fn read_master(path: &Path) -> Result<([u8; SALT_LEN], [u8; DIGEST_LEN])> {
    let data = fs::read(path)?;
    if data.len() != MASTER_LEN {
        return Err(PassVaultError::InvalidFileFormat(format!(
            "master file is {} bytes, expected {MASTER_LEN}",
            data.len()
        )));
    }

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&data[..SALT_LEN]);
    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&data[SALT_LEN..]);
    Ok((salt, digest))
}

// ---------------------------------------------------------------------------
// Accounts file
// ---------------------------------------------------------------------------

/// Write the accounts file: little-endian u32 count, then fixed records.
pub fn write_accounts(path: &Path, accounts: &[Account]) -> Result<()> {
    let count = u32::try_from(accounts.len()).map_err(|_| {
        PassVaultError::InvalidFileFormat(format!(
            "account count {} exceeds u32::MAX",
            accounts.len()
        ))
    })?;

    let mut buf = Vec::with_capacity(4 + accounts.len() * RECORD_LEN);
    buf.extend_from_slice(&count.to_le_bytes());
    for account in accounts {
        buf.extend_from_slice(&encode_record(account)?);
    }
    atomic_write(path, &buf)
}

/// Read and decode every record in the accounts file.
pub fn read_accounts(path: &Path) -> Result<Vec<Account>> {
    let data = fs::read(path)?;
    if data.len() < 4 {
        return Err(PassVaultError::InvalidFileFormat(
            "accounts file too small to hold a record count".into(),
        ));
    }

    let count = u32::from_le_bytes(
        data[..4]
            .try_into()
            .map_err(|_| PassVaultError::InvalidFileFormat("bad record count".into()))?,
    ) as usize;

    let body = &data[4..];
    if body.len() != count * RECORD_LEN {
        return Err(PassVaultError::InvalidFileFormat(format!(
            "accounts file body is {} bytes, expected {} for {count} records",
            body.len(),
            count * RECORD_LEN
        )));
    }

    body.chunks_exact(RECORD_LEN).map(decode_record).collect()
}

// ---------------------------------------------------------------------------
// Record codec
// ---------------------------------------------------------------------------

/// Encode one account into its fixed-size on-disk record.
pub fn encode_record(account: &Account) -> Result<[u8; RECORD_LEN]> {
    check_field("service", &account.service)?;
    check_field("username", &account.username)?;
    if decode_hex(&account.digest_hex).is_none() {
        return Err(PassVaultError::InvalidFileFormat(format!(
            "account '{}' has a malformed digest",
            account.service
        )));
    }

    let mut record = [0u8; RECORD_LEN];
    let (service, rest) = record.split_at_mut(SERVICE_LEN);
    let (username, rest) = rest.split_at_mut(USER_LEN);
    let (digest, salt) = rest.split_at_mut(HASH_HEX_LEN);

    service[..account.service.len()].copy_from_slice(account.service.as_bytes());
    username[..account.username.len()].copy_from_slice(account.username.as_bytes());
    digest[..account.digest_hex.len()].copy_from_slice(account.digest_hex.as_bytes());
    salt.copy_from_slice(&account.salt);

    Ok(record)
}

/// Decode one fixed-size record back into an account.
pub fn decode_record(record: &[u8]) -> Result<Account> {
    debug_assert_eq!(record.len(), RECORD_LEN);

    let service = read_padded_str(&record[..SERVICE_LEN], "service")?;
    let username = read_padded_str(&record[SERVICE_LEN..SERVICE_LEN + USER_LEN], "username")?;

    let hex_start = SERVICE_LEN + USER_LEN;
    let digest_hex = read_padded_str(&record[hex_start..hex_start + HASH_HEX_LEN], "digest")?;
    if decode_hex(&digest_hex).is_none() {
        return Err(PassVaultError::InvalidFileFormat(format!(
            "record for '{service}' has a malformed digest field"
        )));
    }

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&record[hex_start + HASH_HEX_LEN..]);

    Ok(Account {
        service,
        username,
        digest_hex,
        salt,
    })
}

/// Extract a NUL-padded UTF-8 string from a fixed field.
fn read_padded_str(field: &[u8], name: &str) -> Result<String> {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8(field[..end].to_vec()).map_err(|_| {
        PassVaultError::InvalidFileFormat(format!("{name} field is not valid UTF-8"))
    })
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

/// Write `data` to a temp file in the same directory, then rename over
/// `path`. Rename is atomic on the same filesystem.
fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, data)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
