//! # Analysis Crate
//!
//! Turns the matrix-representation tree dump produced by PAUP* back into
//! per-tree topology calls and per-parameter summaries:
//!
//! - [`blocks`]: split the dump into tree blocks
//! - [`classify`]: call each block True, Hybrid, Wrong or Star
//! - [`records`]: CSV rows for classifications and summaries
//! - [`aggregate`]: sum classifications over partitions

pub mod aggregate;
pub mod blocks;
pub mod classify;
pub mod errors;
pub mod grid;
pub mod records;

pub use aggregate::{summarize, Summary};
pub use blocks::TreeBlockReader;
pub use classify::{
    classify_block, classify_file, classify_trees, output_path, summary_path, ClassifyOutcome,
    TreeType,
};
pub use errors::{ClassifyError, RecordError};
pub use grid::ClassifierGrid;
pub use records::{ClassificationRecord, SummaryRecord};
