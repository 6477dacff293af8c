//! Backup runner.
//! Validates the source, ensures the destination exists, then copies each
//! immediate regular file (symlinks to files count) through the name
//! resolver. Subdirectories and other non-regular children are skipped
//! without recursion.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::BackupError;
use crate::output as out;

use super::copy::backup_file;
use super::helpers::io_error_with_help;

/// Counters reported after a successful run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BackupSummary {
    /// Regular files copied into the destination.
    pub files_copied: usize,
    /// Immediate children skipped because they are not regular files.
    pub entries_skipped: usize,
}

/// Copy every immediate regular file of `src` into `dst`.
///
/// The source is validated before the destination is created, so an invalid
/// source leaves the filesystem untouched. Entries are processed in
/// file-name order for deterministic output. The first failure aborts the
/// run; files already copied stay in place.
pub fn backup_directory(src: &Path, dst: &Path) -> Result<BackupSummary> {
    match fs::metadata(src) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(BackupError::SourceNotFound(src.to_path_buf()).into());
        }
        Err(e) => return Err(io_error_with_help("stat source", src)(e)),
        Ok(meta) if !meta.is_dir() => {
            return Err(BackupError::NotADirectory(src.to_path_buf()).into());
        }
        Ok(_) => {}
    }

    fs::create_dir_all(dst).map_err(io_error_with_help("create destination directory", dst))?;
    debug!(dest = %dst.display(), "destination ready");

    let mut entries: Vec<fs::DirEntry> = fs::read_dir(src)
        .map_err(io_error_with_help("read source directory", src))?
        .collect::<io::Result<Vec<_>>>()
        .map_err(io_error_with_help("read source directory", src))?;
    entries.sort_by_key(|e| e.file_name());

    let mut summary = BackupSummary::default();
    for entry in entries {
        let src_file = entry.path();
        // Stat follows symlinks: a link to a regular file is copied like the
        // file itself, while links to directories (and broken links) are
        // skipped with the other non-regular entries.
        let is_file = match fs::metadata(&src_file) {
            Ok(meta) => meta.is_file(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => return Err(io_error_with_help("stat source entry", &src_file)(e)),
        };
        if !is_file {
            debug!(path = %src_file.display(), "skipping non-regular entry");
            summary.entries_skipped += 1;
            continue;
        }

        let written = backup_file(&src_file, dst, &entry.file_name())?;
        info!(src = %src_file.display(), dest = %written.display(), "copied");
        out::print_user(&format!(
            "Copied: {} -> {}",
            src_file.display(),
            written.display()
        ));
        summary.files_copied += 1;
    }

    Ok(summary)
}
