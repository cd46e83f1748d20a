//! Row-oriented CSV checkpoint export.
//!
//! The checkpoint is the pipeline's durability boundary: once written it
//! can be re-loaded and partitioned without re-walking the filesystem.

use std::path::Path;

use tracing::info;

use crate::constants::checkpoint::COLUMNS;
use crate::errors::HarvestError;
use crate::record::Record;

/// Stream `records` into a CSV file at `path` and return the row count.
///
/// Columns are `index,file_path,content` in emission order (which equals
/// discovery order). Standard CSV quoting applies, so content containing
/// delimiters, quotes, or embedded newlines round-trips byte-for-byte.
/// Records are consumed one at a time; the whole tree is never resident
/// in memory at once.
pub fn write_checkpoint<I>(records: I, path: &Path) -> Result<u64, HarvestError>
where
    I: IntoIterator<Item = Result<Record, HarvestError>>,
{
    let mut writer = csv::Writer::from_path(path).map_err(|err| checkpoint_err(path, err))?;
    writer
        .write_record(COLUMNS)
        .map_err(|err| checkpoint_err(path, err))?;

    let mut rows: u64 = 0;
    for record in records {
        let record = record?;
        writer
            .write_record([
                record.index.to_string().as_str(),
                record.file_path.as_str(),
                record.content.as_str(),
            ])
            .map_err(|err| checkpoint_err(path, err))?;
        rows += 1;
    }
    writer.flush().map_err(|err| checkpoint_err(path, err))?;
    info!(path = %path.display(), rows, "wrote checkpoint");
    Ok(rows)
}

fn checkpoint_err(path: &Path, err: impl std::fmt::Display) -> HarvestError {
    HarvestError::Checkpoint {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
