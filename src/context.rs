//! Per-run output naming and directory layout.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::constants::checkpoint::{FILENAME_EXTENSION, FILENAME_PREFIX};
use crate::constants::context::TIMESTAMP_FORMAT;
use crate::constants::store::DATA_DIR;
use crate::errors::HarvestError;
use crate::store::SplitLabel;

/// Explicit run identity: a timestamp plus the output root it lives under.
///
/// Every path the pipeline writes derives from this value, so tests can
/// inject a fixed timestamp instead of depending on wall-clock time. The
/// timestamped run directory is also the collision-avoidance mechanism:
/// artifacts of one run are never overwritten by a later run.
#[derive(Clone, Debug)]
pub struct RunContext {
    timestamp: String,
    output_root: PathBuf,
}

impl RunContext {
    /// Create a context stamped with the current local time
    /// (`YYYY_MM_DD_HHMM`).
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self::with_timestamp(
            output_root,
            Local::now().format(TIMESTAMP_FORMAT).to_string(),
        )
    }

    /// Create a context with an explicit timestamp (used by tests and
    /// by callers replaying a known run).
    pub fn with_timestamp(output_root: impl Into<PathBuf>, timestamp: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            output_root: output_root.into(),
        }
    }

    /// The run's timestamp string.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// `<output_root>/<timestamp>`.
    pub fn run_dir(&self) -> PathBuf {
        self.output_root.join(&self.timestamp)
    }

    /// `<run_dir>/dataset_<timestamp>.csv`.
    pub fn checkpoint_path(&self) -> PathBuf {
        self.run_dir().join(format!(
            "{FILENAME_PREFIX}{}.{FILENAME_EXTENSION}",
            self.timestamp
        ))
    }

    /// `<run_dir>/data`, holding both subset directories.
    pub fn data_dir(&self) -> PathBuf {
        self.run_dir().join(DATA_DIR)
    }

    /// `<run_dir>/data/<label>`.
    pub fn subset_dir(&self, label: SplitLabel) -> PathBuf {
        self.data_dir().join(label.as_str())
    }

    /// Create the run directory tree.
    pub fn create_dirs(&self) -> Result<(), HarvestError> {
        fs::create_dir_all(self.run_dir())?;
        Ok(())
    }
}

/// Recover the run timestamp from a run directory's name.
///
/// Run directories are named by their timestamp, so reload paths derive
/// it from the directory name instead of guessing.
pub fn run_timestamp(run_dir: &Path) -> Result<String, HarvestError> {
    run_dir
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_string())
        .ok_or_else(|| HarvestError::InvalidRoot {
            path: run_dir.to_path_buf(),
            reason: "run directory has no usable name".to_string(),
        })
}

/// Locate the checkpoint file inside an existing run directory.
pub fn checkpoint_path_in(run_dir: &Path) -> Result<PathBuf, HarvestError> {
    let timestamp = run_timestamp(run_dir)?;
    Ok(run_dir.join(format!("{FILENAME_PREFIX}{timestamp}.{FILENAME_EXTENSION}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_derive_from_injected_timestamp() {
        let ctx = RunContext::with_timestamp("/tmp/out", "2024_03_01_0930");
        assert_eq!(ctx.timestamp(), "2024_03_01_0930");
        assert_eq!(ctx.run_dir(), Path::new("/tmp/out/2024_03_01_0930"));
        assert_eq!(
            ctx.checkpoint_path(),
            Path::new("/tmp/out/2024_03_01_0930/dataset_2024_03_01_0930.csv")
        );
        assert_eq!(ctx.data_dir(), Path::new("/tmp/out/2024_03_01_0930/data"));
        assert_eq!(
            ctx.subset_dir(SplitLabel::Train),
            Path::new("/tmp/out/2024_03_01_0930/data/train")
        );
    }

    #[test]
    fn wall_clock_timestamp_matches_layout_format() {
        let ctx = RunContext::new("/tmp/out");
        // YYYY_MM_DD_HHMM: 15 chars, underscores at fixed offsets.
        let ts = ctx.timestamp();
        assert_eq!(ts.len(), 15);
        for (pos, ch) in ts.char_indices() {
            match pos {
                4 | 7 | 10 => assert_eq!(ch, '_'),
                _ => assert!(ch.is_ascii_digit()),
            }
        }
    }

    #[test]
    fn checkpoint_path_recovers_from_run_dir_name() {
        let path = checkpoint_path_in(Path::new("/tmp/out/2024_03_01_0930")).unwrap();
        assert_eq!(
            path,
            Path::new("/tmp/out/2024_03_01_0930/dataset_2024_03_01_0930.csv")
        );
    }

    #[test]
    fn run_timestamp_requires_a_named_directory() {
        assert_eq!(
            run_timestamp(Path::new("/tmp/out/2024_03_01_0930")).unwrap(),
            "2024_03_01_0930"
        );
        let err = run_timestamp(Path::new("/")).unwrap_err();
        assert!(matches!(err, HarvestError::InvalidRoot { .. }));
    }
}
