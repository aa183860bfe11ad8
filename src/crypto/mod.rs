//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - the from-scratch SHA-256 digest engine and hex codec (`digest`)
//! - salted credential hashing and verification (`salted`)

pub mod digest;
pub mod salted;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{sha256, hash_with_salt, verify, ...};
pub use digest::{decode_hex, encode_hex, sha256, DIGEST_LEN};
pub use salted::{
    generate_salt, generate_salt_from, hash_with_salt, hash_with_salt_hex, verify, RandomSource,
    SystemRandom, SALT_LEN,
};
