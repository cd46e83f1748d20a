//! Record model and the streaming builder that produces records.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::HarvestError;
use crate::policy::ExtensionPolicy;
use crate::types::{PathString, RecordIndex};
use crate::walker::walk_files;

/// One accepted source file: its assigned index, path, and a full
/// content snapshot taken at read time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Zero-based index assigned in discovery order; indices of one run
    /// form the contiguous range `[0, N)`.
    pub index: RecordIndex,
    /// Path of the file, unique per run.
    pub file_path: PathString,
    /// Full textual content at read time; never re-read after capture.
    pub content: String,
}

/// Streaming record builder over the accepted files under a root.
///
/// The walk and policy filter run up front (paths only); file contents
/// are read lazily one record at a time, so memory stays bounded by the
/// largest single file rather than the whole tree. A file that cannot be
/// decoded as UTF-8 text fails the run — binary data hiding behind an
/// allowed extension is a fatal condition, not a skip.
pub struct RecordReader {
    paths: std::vec::IntoIter<PathBuf>,
    next_index: RecordIndex,
}

impl RecordReader {
    /// Walk `root`, apply `policy` to each filename, and prepare a
    /// reader over the accepted paths in discovery order.
    pub fn new(root: &Path, policy: &ExtensionPolicy) -> Result<Self, HarvestError> {
        let accepted: Vec<PathBuf> = walk_files(root)?
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .map(|name| policy.accepts(name))
                    .unwrap_or(false)
            })
            .collect();
        debug!(root = %root.display(), accepted = accepted.len(), "prepared record reader");
        Ok(Self {
            paths: accepted.into_iter(),
            next_index: 0,
        })
    }

    fn read_record(&mut self, path: PathBuf) -> Result<Record, HarvestError> {
        let bytes = fs::read(&path)?;
        let content =
            String::from_utf8(bytes).map_err(|_| HarvestError::Decode { path: path.clone() })?;
        let record = Record {
            index: self.next_index,
            file_path: path.to_string_lossy().into_owned(),
            content,
        };
        self.next_index += 1;
        Ok(record)
    }
}

impl Iterator for RecordReader {
    type Item = Result<Record, HarvestError>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.paths.next()?;
        Some(self.read_record(path))
    }
}
