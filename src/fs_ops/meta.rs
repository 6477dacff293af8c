//! Metadata preservation.
//! Copies timestamps and permission bits from source to destination.

use anyhow::{Context, Result};
use filetime::{set_file_times, FileTime};
use std::fs;
use std::path::Path;

pub(super) fn preserve_metadata(src: &Path, dest: &Path) -> Result<()> {
    let meta = fs::metadata(src).with_context(|| format!("stat '{}'", src.display()))?;

    let (at_opt, mt_opt) = {
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            let mt = FileTime::from_unix_time(meta.mtime(), meta.mtime_nsec() as u32);
            let at = FileTime::from_unix_time(meta.atime(), meta.atime_nsec() as u32);
            (Some(at), Some(mt))
        }
        #[cfg(not(unix))]
        {
            let at = meta.accessed().ok().map(FileTime::from_system_time);
            let mt = meta.modified().ok().map(FileTime::from_system_time);
            (at, mt)
        }
    };

    if let (Some(at), Some(mt)) = (at_opt, mt_opt) {
        set_file_times(dest, at, mt)
            .with_context(|| format!("set times on '{}'", dest.display()))?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let src_mode = meta.permissions().mode() & 0o777;
        let dest_meta =
            fs::metadata(dest).with_context(|| format!("stat '{}'", dest.display()))?;
        let mut perms = dest_meta.permissions();
        perms.set_mode(src_mode);
        fs::set_permissions(dest, perms)
            .with_context(|| format!("set permissions on '{}'", dest.display()))?;
    }

    Ok(())
}
