//! Salted credential hashing and verification.
//!
//! A credential is never stored in plaintext: the vault keeps a random
//! 16-byte salt and the SHA-256 digest of `secret ++ salt`. The
//! concatenation order (secret first, salt appended) is part of the on-disk
//! contract — the write and verify paths both go through `hash_with_salt`
//! so they cannot diverge.

use rand::RngCore;
use subtle::ConstantTimeEq;

use crate::crypto::digest::{encode_hex, sha256, DIGEST_LEN};
use crate::errors::{PassVaultError, Result};

/// Length of a credential salt in bytes.
pub const SALT_LEN: usize = 16;

/// Source of salt randomness.
///
/// Production code uses [`SystemRandom`]; tests inject a deterministic
/// fixture so salts (and therefore digests) are reproducible.
pub trait RandomSource {
    /// Fill `buf` entirely with random bytes.
    fn fill(&mut self, buf: &mut [u8]);
}

/// The default randomness source: the OS-seeded CSPRNG from `rand`.
#[derive(Default)]
pub struct SystemRandom;

impl RandomSource for SystemRandom {
    fn fill(&mut self, buf: &mut [u8]) {
        rand::rng().fill_bytes(buf);
    }
}

/// Generate a fresh random 16-byte salt.
///
/// A new salt must be generated every time a credential is (re)established,
/// including master-password rotation — salts are never reused.
pub fn generate_salt() -> [u8; SALT_LEN] {
    generate_salt_from(&mut SystemRandom)
}

/// Generate a salt from an explicit randomness source.
pub fn generate_salt_from(source: &mut dyn RandomSource) -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    source.fill(&mut salt);
    salt
}

/// Compute the digest of `secret ++ salt`.
///
/// The salt must be exactly [`SALT_LEN`] bytes; anything else is rejected
/// rather than silently padded or truncated, so digests stay comparable
/// across versions. An empty secret is allowed.
pub fn hash_with_salt(secret: &[u8], salt: &[u8]) -> Result<[u8; DIGEST_LEN]> {
    check_salt(salt)?;
    let mut input = Vec::with_capacity(secret.len() + salt.len());
    input.extend_from_slice(secret);
    input.extend_from_slice(salt);
    Ok(sha256(&input))
}

/// Compute the digest of `secret ++ salt`, hex-encoded.
///
/// Always 64 lowercase hex characters — the form persisted in account
/// records.
pub fn hash_with_salt_hex(secret: &[u8], salt: &[u8]) -> Result<String> {
    Ok(encode_hex(&hash_with_salt(secret, salt)?))
}

/// Recompute the digest for `secret` + `salt` and compare it to
/// `expected` in constant time over the full 32 bytes.
pub fn verify(secret: &[u8], salt: &[u8], expected: &[u8; DIGEST_LEN]) -> Result<bool> {
    let actual = hash_with_salt(secret, salt)?;
    Ok(actual.ct_eq(expected).into())
}

fn check_salt(salt: &[u8]) -> Result<()> {
    if salt.len() != SALT_LEN {
        return Err(PassVaultError::InvalidSaltLength {
            expected: SALT_LEN,
            actual: salt.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fills buffers with a repeating counter — deterministic across runs.
    struct FixedRandom(u8);

    impl RandomSource for FixedRandom {
        fn fill(&mut self, buf: &mut [u8]) {
            for byte in buf {
                *byte = self.0;
                self.0 = self.0.wrapping_add(1);
            }
        }
    }

    #[test]
    fn injected_source_is_deterministic() {
        let salt = generate_salt_from(&mut FixedRandom(0));
        let expected: [u8; SALT_LEN] = core::array::from_fn(|i| i as u8);
        assert_eq!(salt, expected);
    }

    #[test]
    fn rejects_short_and_long_salts() {
        assert!(hash_with_salt(b"pw", &[0u8; 15]).is_err());
        assert!(hash_with_salt(b"pw", &[0u8; 17]).is_err());
        assert!(verify(b"pw", &[], &[0u8; DIGEST_LEN]).is_err());
    }

    #[test]
    fn round_trip_verifies() {
        let salt = generate_salt();
        let digest = hash_with_salt(b"hunter2", &salt).unwrap();
        assert!(verify(b"hunter2", &salt, &digest).unwrap());
        assert!(!verify(b"hunter3", &salt, &digest).unwrap());
    }

    #[test]
    fn empty_secret_is_allowed() {
        let salt = [0u8; SALT_LEN];
        let hex = hash_with_salt_hex(b"", &salt).unwrap();
        // sha256 of 16 zero bytes.
        assert_eq!(
            hex,
            "374708fff7719dd5979ec875d56cd2286f6d3cf7ec317a3b25632aab28ec37bb"
        );
    }
}
