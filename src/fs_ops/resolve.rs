//! Destination-name resolution.
//!
//! Policy: keep the original filename when nothing sits at that path; on
//! collision append a local-time `YYYYMMDD_HHMMSS` stamp before the extension
//! ("notes.md" -> "notes_20260827_141503.md"). Splitting follows
//! `file_stem`/`extension`, so dotfiles keep their name intact (".env" ->
//! ".env_<stamp>") and only the last extension moves ("a.tar.gz" ->
//! "a.tar_<stamp>.gz").
//!
//! A wall-clock stamp cannot disambiguate two collisions within the same
//! second, so the copy path never trusts the resolved name: it creates the
//! destination with `create_new` and extends the walk with counter suffixes
//! on `AlreadyExists` (see `copy::backup_file`).

use chrono::Local;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::trace;

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Current local time formatted for collision suffixes.
pub(super) fn local_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Compute the destination path for `name` inside `dest_dir`.
///
/// Pure over current time and filesystem existence state at call time:
/// nothing is created or modified, and the timestamped fallback is returned
/// without re-checking for a second collision.
pub fn resolve_destination(dest_dir: &Path, name: &OsStr) -> PathBuf {
    let candidate = dest_dir.join(name);
    if !candidate.exists() {
        return candidate;
    }

    let stamped = dest_dir.join(stamped_name(name, &local_stamp(), None));
    trace!(name = ?name, dest = %stamped.display(), "name taken, stamping");
    stamped
}

/// Build `<stem>_<stamp>[_<counter>]<.ext>` from `name`, preserving non-UTF-8
/// stems via `OsString`.
pub(super) fn stamped_name(name: &OsStr, stamp: &str, counter: Option<u64>) -> OsString {
    let base = Path::new(name);
    let stem: OsString = base
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from(name));
    let ext: Option<OsString> = base.extension().map(|e| e.to_os_string());

    let mut new_name = stem;
    new_name.push(format!("_{stamp}"));
    if let Some(n) = counter {
        new_name.push(format!("_{n}"));
    }
    if let Some(e) = ext {
        new_name.push(".");
        new_name.push(e);
    }
    new_name
}
