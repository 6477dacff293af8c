//! Core library for `flatback`.
//!
//! Flat, one-shot directory backup: enumerate the immediate regular files of
//! a source directory and copy each one into a destination directory, picking
//! a collision-free name when the destination already holds that filename.
//! Subdirectories are skipped by design; there is no recursion, scheduling or
//! incremental state.

pub mod errors;
pub mod fs_ops;
pub mod output;

pub use errors::BackupError;
pub use fs_ops::{backup_directory, resolve_destination, BackupSummary};
