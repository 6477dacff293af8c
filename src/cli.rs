//! CLI definition and parsing.
//! Two required positional paths; relative paths are interpreted against the
//! current working directory.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Copy the files of a directory into another, renaming on collision"
)]
pub struct Args {
    /// Path to the source directory.
    #[arg(value_name = "SOURCE", value_hint = ValueHint::DirPath)]
    pub source: PathBuf,

    /// Path to the destination directory (created if missing).
    #[arg(value_name = "DESTINATION", value_hint = ValueHint::DirPath)]
    pub destination: PathBuf,
}

pub fn parse() -> Args {
    Args::parse()
}
