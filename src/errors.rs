use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Crypto errors ---
    #[error("Invalid salt length: expected {expected} bytes, got {actual}")]
    InvalidSaltLength { expected: usize, actual: usize },

    // --- Master credential errors ---
    #[error("No master password set — run `passvault init` first")]
    MasterNotSet,

    #[error("A master password already exists at {0}")]
    MasterAlreadyExists(PathBuf),

    #[error("Master password incorrect")]
    MasterMismatch,

    // --- Store errors ---
    #[error("Invalid vault file format: {0}")]
    InvalidFileFormat(String),

    #[error("No account found for service '{0}'")]
    AccountNotFound(String),

    #[error("Field '{field}' exceeds {max} bytes")]
    FieldTooLong { field: &'static str, max: usize },

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("Password mismatch — passwords do not match")]
    PasswordMismatch,
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
