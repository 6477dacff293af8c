#![cfg(unix)]

use std::ffi::OsStr;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use tempfile::tempdir;

use flatback::fs_ops::backup_file;

#[test]
fn copy_preserves_mode_bits() {
    let td = tempdir().unwrap();
    let src = td.path().join("src_meta.txt");
    fs::write(&src, "contents").unwrap();
    let mut perms = fs::metadata(&src).unwrap().permissions();
    perms.set_mode(0o640);
    fs::set_permissions(&src, perms).unwrap();

    let dest_dir = td.path().join("destm");
    fs::create_dir_all(&dest_dir).unwrap();

    let dest = backup_file(&src, &dest_dir, OsStr::new("src_meta.txt")).unwrap();
    let meta = fs::metadata(&dest).unwrap();
    assert_eq!(meta.permissions().mode() & 0o777, 0o640);
}

#[test]
fn stamped_copy_also_preserves_mode_bits() {
    let td = tempdir().unwrap();
    let src = td.path().join("src_meta.txt");
    fs::write(&src, "contents").unwrap();
    let mut perms = fs::metadata(&src).unwrap().permissions();
    perms.set_mode(0o600);
    fs::set_permissions(&src, perms).unwrap();

    let dest_dir = td.path().join("destm");
    fs::create_dir_all(&dest_dir).unwrap();
    // Occupy the plain name so the copy lands on a stamped candidate.
    fs::write(dest_dir.join("src_meta.txt"), "taken").unwrap();

    let dest = backup_file(&src, &dest_dir, OsStr::new("src_meta.txt")).unwrap();
    assert_ne!(dest, dest_dir.join("src_meta.txt"));
    let meta = fs::metadata(&dest).unwrap();
    assert_eq!(meta.permissions().mode() & 0o777, 0o600);
}
