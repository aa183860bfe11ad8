//! One module per subcommand.

pub mod add;
pub mod change_master;
pub mod find;
pub mod init;
pub mod list;
pub mod remove;
pub mod verify;
