//! The three pipeline entry points: extract, extract-and-partition, load.
//!
//! Everything runs single-threaded and blocking: walk, filter, stream
//! records into the CSV checkpoint, then (optionally) re-read the
//! checkpoint and partition it. Re-reading instead of reusing in-memory
//! state is deliberate — the checkpoint is the durability boundary, and
//! a split can always be regenerated from it alone.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::checkpoint::write_checkpoint;
use crate::context::{run_timestamp, RunContext};
use crate::errors::HarvestError;
use crate::policy::ExtensionPolicy;
use crate::record::RecordReader;
use crate::store::{load_split, save_split};
use crate::table::{DatasetSplit, DatasetTable, SplitConfig};

/// Outcome of a checkpoint-only extraction.
#[derive(Clone, Debug)]
pub struct ExtractionReport {
    /// Number of records written.
    pub records: u64,
    /// Path of the CSV checkpoint.
    pub checkpoint: PathBuf,
}

/// Outcome of a full extract-and-partition run.
#[derive(Clone, Debug)]
pub struct PartitionReport {
    /// Number of records written to the checkpoint.
    pub records: u64,
    /// Path of the CSV checkpoint.
    pub checkpoint: PathBuf,
    /// Rows persisted to the train subset.
    pub train_rows: u64,
    /// Rows persisted to the test subset.
    pub test_rows: u64,
}

/// Walk `root`, filter by the default extension policy, and stream the
/// accepted files into the run's CSV checkpoint.
pub fn extract(root: &Path, ctx: &RunContext) -> Result<ExtractionReport, HarvestError> {
    let reader = RecordReader::new(root, &ExtensionPolicy::default())?;
    ctx.create_dirs()?;
    let checkpoint = ctx.checkpoint_path();
    let records = write_checkpoint(reader, &checkpoint)?;
    info!(root = %root.display(), records, "extraction complete");
    Ok(ExtractionReport {
        records,
        checkpoint,
    })
}

/// Run [`extract`], then re-read the checkpoint, partition it with
/// `config`, and persist both subsets under the run's `data/` directory.
pub fn extract_and_partition(
    root: &Path,
    ctx: &RunContext,
    config: &SplitConfig,
) -> Result<PartitionReport, HarvestError> {
    let extraction = extract(root, ctx)?;
    let table = DatasetTable::from_checkpoint(&extraction.checkpoint)?;
    let split = table.partition(config)?;
    save_split(&split, &ctx.data_dir())?;
    Ok(PartitionReport {
        records: extraction.records,
        checkpoint: extraction.checkpoint,
        train_rows: split.train.len() as u64,
        test_rows: split.test.len() as u64,
    })
}

/// Reload the train/test subsets of a prior run, bit-for-bit and
/// row-for-row identical to what was saved.
pub fn load_run(run_dir: &Path) -> Result<DatasetSplit, HarvestError> {
    // Resolving the timestamp first makes a mistyped run path fail with
    // the run dir, not a subset artifact, in the message.
    let timestamp = run_timestamp(run_dir)?;
    let split = load_split(&run_dir.join(crate::constants::store::DATA_DIR))?;
    info!(
        run_dir = %run_dir.display(),
        timestamp = %timestamp,
        train = split.train.len(),
        test = split.test.len(),
        "loaded dataset"
    );
    Ok(split)
}
