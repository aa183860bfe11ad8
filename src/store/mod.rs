//! Flat-file storage: the master credential file and the accounts file.

pub mod account;
pub mod accounts;
pub mod format;
pub mod master;

pub use account::Account;
pub use accounts::{AccountStore, ACCOUNTS_FILE};
pub use master::{MasterStore, MASTER_FILE};
