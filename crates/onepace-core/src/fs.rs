//! # Filesystem Capability
//!
//! The handful of filesystem operations the organizer needs, behind a trait
//! so the parser's existence check and the relocation executor can run
//! against a fake in tests.

use std::fs;
use std::io;
use std::path::Path;

/// Filesystem operations used by the parser and the relocation executor.
pub trait FileSystem {
    /// Returns `true` if something exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Creates `path` and all missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Moves the file at `from` to `to`.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    /// Renames in place, falling back to copy + remove only when the
    /// rename crosses devices.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        match fs::rename(from, to) {
            Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
                tracing::debug!(
                    src = %from.display(),
                    dest = %to.display(),
                    error = %err,
                    "rename crosses devices, falling back to copy"
                );
                move_by_copy(from, to)
            }
            result => result,
        }
    }
}

/// Copies `from` to `to` and removes `from`. On any failure the
/// destination is removed again so exactly one copy remains at `from`.
fn move_by_copy(from: &Path, to: &Path) -> io::Result<()> {
    let result = fs::copy(from, to).and_then(|_| fs::remove_file(from));
    if let Err(err) = &result {
        discard_partial(to, err);
    }
    result
}

fn discard_partial(to: &Path, cause: &io::Error) {
    match fs::remove_file(to) {
        Ok(()) => tracing::debug!(dest = %to.display(), error = %cause, "removed partial copy"),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!(
            dest = %to.display(),
            error = %e,
            "Failed to remove partial copy"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_fs_moves_file() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("a.mkv");
        let to = dir.path().join("nested").join("a.mkv");
        fs::write(&from, b"data").unwrap();

        let fs = StdFileSystem;
        fs.create_dir_all(to.parent().unwrap()).unwrap();
        fs.rename(&from, &to).unwrap();

        assert!(!fs.exists(&from));
        assert_eq!(fs::read(&to).unwrap(), b"data");
        assert!(fs.is_dir(&dir.path().join("nested")));
    }

    #[test]
    fn copy_fallback_moves_file() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("a.mkv");
        let to = dir.path().join("b.mkv");
        fs::write(&from, b"data").unwrap();

        move_by_copy(&from, &to).unwrap();

        assert!(!from.exists());
        assert_eq!(fs::read(&to).unwrap(), b"data");
    }

    #[test]
    fn copy_fallback_failure_leaves_no_destination() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("a.mkv");
        let to = dir.path().join("b.mkv");
        fs::create_dir(&from).unwrap();

        assert!(move_by_copy(&from, &to).is_err());
        assert!(from.is_dir());
        assert!(!to.exists());
    }

    #[test]
    fn failed_remove_after_copy_keeps_only_the_source() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("a.mkv");
        let to = dir.path().join("b.mkv");
        fs::write(&from, b"data").unwrap();

        let err = fs::copy(&from, &to).and_then(|_| {
            Err::<(), _>(io::Error::new(io::ErrorKind::PermissionDenied, "locked"))
        });
        discard_partial(&to, &err.unwrap_err());

        assert!(from.is_file());
        assert!(!to.exists());
    }

    #[test]
    fn same_device_errors_are_not_retried_as_copy() {
        let dir = tempfile::tempdir().unwrap();
        let from = dir.path().join("a.mkv");
        let to = dir.path().join("dest");
        fs::write(&from, b"data").unwrap();
        fs::create_dir(&to).unwrap();
        fs::write(to.join("keep"), b"x").unwrap();

        assert!(StdFileSystem.rename(&from, &to).is_err());
        assert!(from.is_file());
        assert!(to.join("keep").is_file());
    }

    #[test]
    fn std_fs_rename_missing_source_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = StdFileSystem
            .rename(&dir.path().join("nope"), &dir.path().join("dest"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
