//! Error handling for CVE dataset processing.
//!
//! Provides error types with context for file access, row reassembly,
//! and record parsing failures. All failures are fatal for the run;
//! there is no partial-record recovery.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset not found at path: {path}")]
    DatasetNotFound { path: PathBuf },

    #[error("Dataset has no header line: {path}")]
    MissingHeader { path: PathBuf },

    #[error("Data line {line_number} is a continuation with no preceding record: {line:?}")]
    OrphanContinuation { line_number: usize, line: String },

    #[error("Malformed record '{row_id}': expected {expected} fields, found {found}")]
    MalformedRecord {
        row_id: String,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, RankerError>;
