//! Implementations of everything `ax` can be asked to do.

pub mod complete;
pub mod dispatch;
pub mod help;
pub mod init;
pub mod shell_hook;
pub mod update;
pub mod version;
