//! The account record type stored in the accounts file.
//!
//! An account never holds a plaintext password — only the hex-encoded
//! salted digest and the raw salt it was computed with. Replacing a
//! password replaces both fields together; records are never patched in
//! place.

use crate::crypto::SALT_LEN;

/// A single credential record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Service name (e.g. "gmail"). At most 99 bytes.
    pub service: String,

    /// Username for the service. At most 99 bytes.
    pub username: String,

    /// Salted password digest as 64 lowercase hex characters.
    pub digest_hex: String,

    /// The raw salt the digest was computed with.
    pub salt: [u8; SALT_LEN],
}
