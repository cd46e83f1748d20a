#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Row-oriented CSV checkpoint export.
pub mod checkpoint;
/// Centralized constants for policy tables, formats, and layout names.
pub mod constants;
/// Per-run output naming and directory layout.
pub mod context;
mod errors;
/// Extension allow/deny policy.
pub mod policy;
/// Pipeline entry points.
pub mod pipeline;
/// Record model and streaming record builder.
pub mod record;
/// Columnar subset persistence.
pub mod store;
/// Columnar dataset table and deterministic partitioner.
pub mod table;
/// Shared type aliases.
pub mod types;
/// Recursive filesystem traversal.
pub mod walker;

pub use checkpoint::write_checkpoint;
pub use context::RunContext;
pub use errors::HarvestError;
pub use pipeline::{extract, extract_and_partition, load_run, ExtractionReport, PartitionReport};
pub use policy::ExtensionPolicy;
pub use record::{Record, RecordReader};
pub use store::{load_split, load_subset, save_split, save_subset, SplitLabel};
pub use table::{DatasetSplit, DatasetTable, SplitConfig};
pub use types::{PathString, RecordIndex};
