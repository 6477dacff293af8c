//! Exclusive-create streaming copy.
//!
//! The destination file is always opened with `create_new`, so an existing
//! file is never clobbered even if it appeared between name resolution and
//! the copy. When creation loses that race, or the timestamped name was
//! already taken (same-second rerun), the walk moves on to counter-suffixed
//! candidates sharing one stamp until exclusive creation succeeds.

use anyhow::{bail, Result};
use std::ffi::OsStr;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::helpers::io_error_with_help;
use super::meta::preserve_metadata;
use super::resolve::{local_stamp, resolve_destination, stamped_name};

const BUF_SIZE: usize = 64 * 1024;
// Bound on counter-suffixed candidates before giving up.
const MAX_TRIES: u64 = 10_000;

/// Copy `src` into `dest_dir` under `name` (or a collision-free variant of
/// it) and preserve its metadata. Returns the path actually written.
pub fn backup_file(src: &Path, dest_dir: &Path, name: &OsStr) -> Result<PathBuf> {
    let first = resolve_destination(dest_dir, name);
    match copy_create_new(src, &first) {
        Ok(bytes) => {
            trace!(bytes, dest = %first.display(), "copy complete");
            preserve_metadata(src, &first)?;
            return Ok(first);
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            debug!(dest = %first.display(), "destination taken, walking stamped candidates");
        }
        Err(e) => return Err(io_error_with_help("copy file to", &first)(e)),
    }

    // Walk further candidates under a fresh stamp: the bare stamped name
    // first (covers losing a race on the original name), then incrementing
    // counters on the same stamp.
    let stamp = local_stamp();
    for counter in std::iter::once(None).chain((2..=MAX_TRIES).map(Some)) {
        let candidate = dest_dir.join(stamped_name(name, &stamp, counter));
        if candidate == first {
            continue;
        }
        match copy_create_new(src, &candidate) {
            Ok(bytes) => {
                trace!(bytes, dest = %candidate.display(), "copy complete");
                preserve_metadata(src, &candidate)?;
                return Ok(candidate);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(io_error_with_help("copy file to", &candidate)(e)),
        }
    }

    bail!(
        "no free destination name for '{}' in '{}' after {} attempts",
        name.to_string_lossy(),
        dest_dir.display(),
        MAX_TRIES
    )
}

/// Buffered copy into a freshly created destination file.
/// `create_new(true)` gives O_EXCL semantics; the caller handles
/// `AlreadyExists` by picking another candidate. A mid-stream failure
/// removes the partial destination so a rerun does not collide with it.
fn copy_create_new(src: &Path, dest: &Path) -> io::Result<u64> {
    let src_f = File::open(src)?;
    let dest_f = OpenOptions::new().write(true).create_new(true).open(dest)?;

    let mut reader = BufReader::with_capacity(BUF_SIZE, src_f);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dest_f);
    let result = io::copy(&mut reader, &mut writer).and_then(|bytes| {
        writer.flush()?;
        Ok(bytes)
    });
    if result.is_err() {
        drop(writer);
        let _ = fs::remove_file(dest);
    }
    result
}
