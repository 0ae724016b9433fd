use std::io;
use thiserror::Error;
use tripsim_sim::errors::ManifestError;

/// Errors raised while classifying a tree dump.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Tree dump ended after {found} blocks, {expected} expected")]
    Truncated { expected: usize, found: usize },
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),
    #[error("Record error: {0}")]
    Record(#[from] RecordError),
}

/// Errors reading or writing record CSV files.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Unexpected header: '{0}'")]
    Header(String),
    #[error("Line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}
