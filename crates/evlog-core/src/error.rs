//! Error types for event log export.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an export run.
///
/// Undecodable bytes and malformed layout are recovered locally and never
/// show up here.
#[derive(Debug, Error)]
pub enum ExportError {
    // === Input Errors ===
    /// Input file does not exist or is not a regular file.
    #[error("input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Failed to read the input file.
    #[error("failed to read input {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Output Errors ===
    /// Failed to create or write the output file.
    #[error("failed to write output {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("failed to write CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
