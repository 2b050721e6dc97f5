//! Discovery of marked episode files under a root.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Returns `true` if `path` is a regular file whose stem contains `marker`.
pub fn is_marked_file(path: &Path, marker: &str) -> bool {
    path.is_file()
        && path
            .file_stem()
            .is_some_and(|stem| stem.to_string_lossy().contains(marker))
}

/// Recursively lists marked files under `root`, sorted by file name at
/// each directory level.
///
/// Unreadable entries are logged and skipped.
pub fn scan(root: &Path, marker: &str) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "Skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| is_marked_file(path, marker))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn finds_marked_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("01 - East Blue Saga/012 - Orange Town Arc")).unwrap();
        fs::write(root.join("[One Pace][1-7] Romance Dawn 01 [720p].mkv"), b"").unwrap();
        fs::write(
            root.join("01 - East Blue Saga/012 - Orange Town Arc/[One Pace][8-11] Orange Town 01 [720p].mkv"),
            b"",
        )
        .unwrap();
        fs::write(root.join("notes.txt"), b"").unwrap();
        fs::create_dir(root.join("[One Pace] folder")).unwrap();

        let found = scan(root, "[One Pace]");

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.is_file()));
        assert!(found.iter().any(|p| p.ends_with("[One Pace][1-7] Romance Dawn 01 [720p].mkv")));
    }

    #[test]
    fn marker_is_matched_on_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("episode.[One Pace]");
        fs::write(&path, b"").unwrap();

        assert!(!is_marked_file(&path, "[One Pace]"));
    }
}
