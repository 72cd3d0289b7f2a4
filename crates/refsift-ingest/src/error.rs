use thiserror::Error;

use crate::FileFormat;

/// Errors that can occur while loading tabular files.
#[derive(Debug, Error)]
pub enum IngestError {
    /// File name does not carry a recognized tabular extension.
    #[error("unsupported file format: '{name}' (expected .csv, .xls or .xlsx)")]
    UnsupportedFormat { name: String },

    /// Content could not be decoded as tabular data.
    #[error("failed to parse {format} data: {message}")]
    Parse { format: FileFormat, message: String },

    /// The input has no header row at all.
    #[error("{format} input contains no header row")]
    EmptyTable { format: FileFormat },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
