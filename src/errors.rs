use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for extraction, checkpoint, and dataset persistence failures.
///
/// Every failure aborts the run; there are no retries and no
/// partial-success mode. An interrupted run can leave a truncated
/// checkpoint behind, which the timestamp-per-run directory layout keeps
/// from colliding with later runs.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Extraction root is missing or not a directory.
    #[error("invalid extraction root '{path}': {reason}", path = .path.display())]
    InvalidRoot {
        /// The rejected root path.
        path: PathBuf,
        /// Why the root was rejected.
        reason: String,
    },
    /// A file matched by extension could not be decoded as UTF-8 text.
    #[error("file '{path}' is not valid UTF-8 text", path = .path.display())]
    Decode {
        /// The undecodable file.
        path: PathBuf,
    },
    /// CSV checkpoint write or read failure.
    #[error("checkpoint failure at '{path}': {reason}", path = .path.display())]
    Checkpoint {
        /// The checkpoint file involved.
        path: PathBuf,
        /// Underlying failure description.
        reason: String,
    },
    /// Columnar subset save or load failure.
    #[error("dataset store failure at '{path}': {reason}", path = .path.display())]
    Store {
        /// The subset artifact involved.
        path: PathBuf,
        /// Underlying failure description.
        reason: String,
    },
    /// Invalid split configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Other filesystem failures (traversal, directory creation, reads).
    #[error(transparent)]
    Io(#[from] io::Error),
}
