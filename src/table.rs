//! Columnar in-memory dataset table and the deterministic partitioner.

use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::info;

use crate::errors::HarvestError;
use crate::types::{PathString, RecordIndex};

/// Column-oriented view of an exported dataset checkpoint.
///
/// Rows are addressed positionally; the three column vectors always have
/// equal length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatasetTable {
    /// `index` column: the record indices assigned during extraction.
    pub indices: Vec<RecordIndex>,
    /// `file_path` column.
    pub file_paths: Vec<PathString>,
    /// `content` column.
    pub contents: Vec<String>,
}

impl DatasetTable {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Append one row.
    pub fn push_row(&mut self, index: RecordIndex, file_path: PathString, content: String) {
        self.indices.push(index);
        self.file_paths.push(file_path);
        self.contents.push(content);
    }

    /// Borrow the row at position `pos`.
    ///
    /// Panics if `pos` is out of bounds, matching slice indexing.
    pub fn row(&self, pos: usize) -> (RecordIndex, &str, &str) {
        (
            self.indices[pos],
            self.file_paths[pos].as_str(),
            self.contents[pos].as_str(),
        )
    }

    /// Load a CSV checkpoint fully into columnar memory.
    ///
    /// Accepts exactly what [`crate::checkpoint::write_checkpoint`]
    /// produced: a `index,file_path,content` header followed by one row
    /// per record.
    pub fn from_checkpoint(path: &Path) -> Result<Self, HarvestError> {
        let mut reader =
            csv::Reader::from_path(path).map_err(|err| checkpoint_err(path, err.to_string()))?;
        let mut table = Self::default();
        for row in reader.records() {
            let row = row.map_err(|err| checkpoint_err(path, err.to_string()))?;
            if row.len() != 3 {
                return Err(checkpoint_err(
                    path,
                    format!("expected 3 columns, found {}", row.len()),
                ));
            }
            let index: RecordIndex = row[0]
                .parse()
                .map_err(|_| checkpoint_err(path, format!("invalid index value '{}'", &row[0])))?;
            table.push_row(index, row[1].to_string(), row[2].to_string());
        }
        Ok(table)
    }

    /// Deterministically partition the table into train/test subsets.
    ///
    /// A permutation of `0..N` is drawn from an RNG seeded with
    /// `config.seed`; the test subset takes `round(N * test_fraction)`
    /// rows from the tail of the permutation and the train subset takes
    /// the head. The two subsets are disjoint and exhaustive, and the
    /// same `(row order, test_fraction, seed)` always reproduces the
    /// same split, including within-subset row order.
    pub fn partition(&self, config: &SplitConfig) -> Result<DatasetSplit, HarvestError> {
        config.validate()?;
        let total = self.len();
        let mut order: Vec<usize> = (0..total).collect();
        let mut rng = StdRng::seed_from_u64(config.seed);
        order.shuffle(&mut rng);

        let test_rows = (total as f64 * config.test_fraction).round() as usize;
        let cut = total - test_rows;
        let mut split = DatasetSplit::default();
        for (slot, subset) in [
            (&order[..cut], &mut split.train),
            (&order[cut..], &mut split.test),
        ] {
            for &pos in slot {
                let (index, file_path, content) = self.row(pos);
                subset.push_row(index, file_path.to_string(), content.to_string());
            }
        }
        info!(
            total,
            train = split.train.len(),
            test = split.test.len(),
            seed = config.seed,
            "partitioned dataset"
        );
        Ok(split)
    }
}

fn checkpoint_err(path: &Path, reason: String) -> HarvestError {
    HarvestError::Checkpoint {
        path: path.to_path_buf(),
        reason,
    }
}

/// Split parameters: test fraction and shuffle seed.
#[derive(Clone, Copy, Debug)]
pub struct SplitConfig {
    /// Fraction of rows assigned to the test subset.
    pub test_fraction: f64,
    /// Seed for the shuffle permutation.
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.10,
            seed: 42,
        }
    }
}

impl SplitConfig {
    fn validate(&self) -> Result<(), HarvestError> {
        if !(0.0..=1.0).contains(&self.test_fraction) || !self.test_fraction.is_finite() {
            return Err(HarvestError::Configuration(format!(
                "test fraction must be within [0.0, 1.0], got {}",
                self.test_fraction
            )));
        }
        Ok(())
    }
}

/// A disjoint, exhaustive train/test partition of a dataset table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatasetSplit {
    /// Training subset.
    pub train: DatasetTable,
    /// Test subset.
    pub test: DatasetTable,
}
