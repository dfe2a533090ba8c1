//! Deterministic directory traversal.
//!
//! Wraps [`walkdir`] into an iterator over regular files only. Directories
//! are traversed but never yielded, and symbolic links are not followed:
//! symlinked files and directories are skipped entirely, which rules out
//! traversal cycles. Entries within a directory are visited in file-name
//! order so a walk over an unchanged tree is reproducible.
//!
//! Any traversal error (permission denied, vanished entry) is yielded as a
//! [`ScanError`] and the caller is expected to stop there; the walker makes
//! no attempt to skip the offending entry and continue.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::ScanError;

/// Single-threaded walker yielding regular files under a root.
#[derive(Debug)]
pub struct Walker {
    root: PathBuf,
}

impl Walker {
    /// Create a walker rooted at `root`.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Iterate over regular files reachable from the root, depth-first.
    ///
    /// Each item is the file's path and its size in bytes, or the first
    /// [`ScanError`] encountered.
    pub fn regular_files(
        &self,
    ) -> impl Iterator<Item = Result<(PathBuf, u64), ScanError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Err(err) => Some(Err(convert_error(err))),
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        return None;
                    }
                    match entry.metadata() {
                        Ok(meta) => Some(Ok((entry.into_path(), meta.len()))),
                        Err(err) => Some(Err(convert_error(err))),
                    }
                }
            })
    }
}

/// Map a walkdir error onto the scanner's error vocabulary.
fn convert_error(err: walkdir::Error) -> ScanError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let kind = err.io_error().map(std::io::Error::kind);
    match kind {
        Some(std::io::ErrorKind::PermissionDenied) => ScanError::PermissionDenied(path),
        Some(std::io::ErrorKind::NotFound) => ScanError::NotFound(path),
        _ => ScanError::Io {
            path,
            source: err
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("directory loop detected")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_walk_yields_only_regular_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("b.txt"), b"bb").unwrap();

        let files: Vec<_> = Walker::new(dir.path())
            .regular_files()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|(p, _)| p.is_file()));
        assert!(files.iter().any(|(p, size)| p.ends_with("b.txt") && *size == 2));
    }

    #[test]
    fn test_walk_order_is_sorted_by_name() {
        let dir = TempDir::new().unwrap();
        for name in ["zeta", "alpha", "mid"] {
            fs::write(dir.path().join(name), name).unwrap();
        }

        let names: Vec<String> = Walker::new(dir.path())
            .regular_files()
            .map(|r| {
                let (path, _) = r.unwrap();
                path.file_name().unwrap().to_string_lossy().into_owned()
            })
            .collect();

        assert_eq!(names, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_missing_root_yields_error() {
        let dir = TempDir::new().unwrap();
        let gone = dir.path().join("nope");
        let result: Result<Vec<_>, _> = Walker::new(&gone).regular_files().collect();
        assert!(matches!(result, Err(ScanError::NotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_skipped() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("real.txt");
        fs::write(&target, b"content").unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("link.txt")).unwrap();

        let files: Vec<_> = Walker::new(dir.path())
            .regular_files()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].0.ends_with("real.txt"));
    }
}
