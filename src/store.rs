//! Columnar subset persistence (parquet via Arrow).

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use tracing::info;

use crate::constants::store::SUBSET_EXTENSION;
use crate::errors::HarvestError;
use crate::table::{DatasetSplit, DatasetTable};

/// Names of the two persisted dataset subsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SplitLabel {
    /// Training subset.
    Train,
    /// Test subset.
    Test,
}

impl SplitLabel {
    /// Directory and file stem used for this subset on disk.
    pub fn as_str(self) -> &'static str {
        match self {
            SplitLabel::Train => "train",
            SplitLabel::Test => "test",
        }
    }

    /// Both subset labels, in persisted order.
    pub const ALL: [SplitLabel; 2] = [SplitLabel::Train, SplitLabel::Test];
}

fn subset_schema() -> Schema {
    Schema::new(vec![
        Field::new("index", DataType::UInt64, false),
        Field::new("file_path", DataType::Utf8, false),
        Field::new("content", DataType::Utf8, false),
    ])
}

fn subset_path(data_dir: &Path, label: SplitLabel) -> PathBuf {
    data_dir
        .join(label.as_str())
        .join(format!("{}.{}", label.as_str(), SUBSET_EXTENSION))
}

fn store_err(path: &Path, err: impl std::fmt::Display) -> HarvestError {
    HarvestError::Store {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

/// Persist one subset as `data_dir/<label>/<label>.parquet`.
///
/// An existing artifact at the destination is overwritten without any
/// guard; callers avoid collisions through the timestamp-per-run
/// directory convention.
pub fn save_subset(
    table: &DatasetTable,
    data_dir: &Path,
    label: SplitLabel,
) -> Result<PathBuf, HarvestError> {
    let path = subset_path(data_dir, label);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let schema = Arc::new(subset_schema());
    let columns: Vec<ArrayRef> = vec![
        Arc::new(UInt64Array::from(table.indices.clone())),
        Arc::new(StringArray::from(table.file_paths.clone())),
        Arc::new(StringArray::from(table.contents.clone())),
    ];
    let batch =
        RecordBatch::try_new(schema.clone(), columns).map_err(|err| store_err(&path, err))?;

    let file = File::create(&path)?;
    let mut writer =
        ArrowWriter::try_new(file, schema, None).map_err(|err| store_err(&path, err))?;
    writer.write(&batch).map_err(|err| store_err(&path, err))?;
    writer.close().map_err(|err| store_err(&path, err))?;
    info!(path = %path.display(), rows = table.len(), "saved subset");
    Ok(path)
}

/// Load one subset previously written by [`save_subset`].
///
/// Accepts exactly what `save_subset` produced; rows come back in the
/// order they were written. No cross-subset validation happens here —
/// pairing train and test artifacts is the caller's concern.
pub fn load_subset(data_dir: &Path, label: SplitLabel) -> Result<DatasetTable, HarvestError> {
    let path = subset_path(data_dir, label);
    let file = File::open(&path).map_err(|err| store_err(&path, err))?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|err| store_err(&path, err))?
        .build()
        .map_err(|err| store_err(&path, err))?;

    let mut table = DatasetTable::default();
    for batch in reader {
        let batch = batch.map_err(|err| store_err(&path, err))?;
        let indices = batch
            .column(0)
            .as_any()
            .downcast_ref::<UInt64Array>()
            .ok_or_else(|| store_err(&path, "index column is not u64"))?;
        let file_paths = batch
            .column(1)
            .as_any()
            .downcast_ref::<StringArray>()
            .ok_or_else(|| store_err(&path, "file_path column is not utf8"))?;
        let contents = batch
            .column(2)
            .as_any()
            .downcast_ref::<StringArray>()
            .ok_or_else(|| store_err(&path, "content column is not utf8"))?;
        for row in 0..batch.num_rows() {
            table.push_row(
                indices.value(row),
                file_paths.value(row).to_string(),
                contents.value(row).to_string(),
            );
        }
    }
    Ok(table)
}

/// Persist both subsets of `split` under `data_dir`.
pub fn save_split(split: &DatasetSplit, data_dir: &Path) -> Result<(), HarvestError> {
    save_subset(&split.train, data_dir, SplitLabel::Train)?;
    save_subset(&split.test, data_dir, SplitLabel::Test)?;
    Ok(())
}

/// Load both subsets from `data_dir`, independently of each other.
pub fn load_split(data_dir: &Path) -> Result<DatasetSplit, HarvestError> {
    Ok(DatasetSplit {
        train: load_subset(data_dir, SplitLabel::Train)?,
        test: load_subset(data_dir, SplitLabel::Test)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_table(rows: u64, tag: &str) -> DatasetTable {
        let mut table = DatasetTable::default();
        for index in 0..rows {
            table.push_row(
                index,
                format!("{tag}/file_{index}.py"),
                format!("{tag} content {index}\nwith a second line"),
            );
        }
        table
    }

    #[test]
    fn subset_round_trips_content_and_order() {
        let temp = tempdir().unwrap();
        let table = sample_table(12, "train");

        let written = save_subset(&table, temp.path(), SplitLabel::Train).unwrap();
        assert!(written.ends_with("train/train.parquet"));

        let loaded = load_subset(temp.path(), SplitLabel::Train).unwrap();
        assert_eq!(loaded, table);
    }

    #[test]
    fn split_round_trips_both_subsets_independently() {
        let temp = tempdir().unwrap();
        let split = DatasetSplit {
            train: sample_table(9, "train"),
            test: sample_table(3, "test"),
        };
        save_split(&split, temp.path()).unwrap();

        // Each subset loads on its own.
        assert_eq!(
            load_subset(temp.path(), SplitLabel::Test).unwrap(),
            split.test
        );
        let reloaded = load_split(temp.path()).unwrap();
        assert_eq!(reloaded, split);
    }

    #[test]
    fn empty_subset_round_trips() {
        let temp = tempdir().unwrap();
        let empty = DatasetTable::default();
        save_subset(&empty, temp.path(), SplitLabel::Test).unwrap();
        let loaded = load_subset(temp.path(), SplitLabel::Test).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn missing_artifact_is_a_store_error() {
        let temp = tempdir().unwrap();
        let err = load_subset(temp.path(), SplitLabel::Train).unwrap_err();
        assert!(matches!(err, HarvestError::Store { .. }));
    }

    #[test]
    fn subset_labels_name_their_directories() {
        let dir = Path::new("data");
        assert_eq!(
            subset_path(dir, SplitLabel::Train),
            Path::new("data/train/train.parquet")
        );
        assert_eq!(
            subset_path(dir, SplitLabel::Test),
            Path::new("data/test/test.parquet")
        );
    }
}
