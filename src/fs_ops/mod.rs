//! Filesystem operations: modularized.

mod copy;
mod helpers;
mod meta;
mod resolve;
mod runner;

pub use copy::backup_file;
pub use resolve::resolve_destination;
pub use runner::{backup_directory, BackupSummary};
