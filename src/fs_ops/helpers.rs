//! I/O error adapters.
//!
//! Maps raw `io::Error`s into the user-visible failure categories, keeping
//! permission problems typed so the top level can report them and exit
//! distinctly.
//!
//! Usage:
//!   fs::create_dir_all(dir).map_err(io_error_with_help("create destination directory", dir))?;

use std::io;
use std::path::Path;

use crate::errors::BackupError;

/// Adapter for `map_err`: classify permission failures as
/// `BackupError::PermissionDenied`, otherwise wrap with an `op 'path'`
/// context message.
pub(super) fn io_error_with_help<'a>(
    op: &'static str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e| {
        if e.kind() == io::ErrorKind::PermissionDenied {
            BackupError::PermissionDenied {
                path: path.to_path_buf(),
                context: format!("{op}: {e}"),
            }
            .into()
        } else {
            anyhow::Error::new(e).context(format!("{op} '{}'", path.display()))
        }
    }
}
