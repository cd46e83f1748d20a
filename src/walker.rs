//! Recursive filesystem traversal under an extraction root.

use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use crate::errors::HarvestError;

/// Enumerate every file reachable under `root`, unbounded depth.
///
/// Symlinks are not followed, which also sidesteps symlink cycles. A
/// permission-denied subtree is skipped with a warning; any other
/// traversal failure aborts the walk. Discovered paths are sorted
/// lexically before being returned so that downstream index assignment
/// is deterministic across platforms and runs.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>, HarvestError> {
    if !root.exists() {
        return Err(HarvestError::InvalidRoot {
            path: root.to_path_buf(),
            reason: "path does not exist".to_string(),
        });
    }
    if !root.is_dir() {
        return Err(HarvestError::InvalidRoot {
            path: root.to_path_buf(),
            reason: "path is not a directory".to_string(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let denied = err
                    .io_error()
                    .map(|io_err| io_err.kind() == io::ErrorKind::PermissionDenied)
                    .unwrap_or(false);
                if denied {
                    warn!(
                        path = %err.path().unwrap_or(root).display(),
                        "skipping unreadable directory"
                    );
                    continue;
                }
                return Err(HarvestError::Io(err.into()));
            }
        };
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}
