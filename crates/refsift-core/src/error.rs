use thiserror::Error;

/// Errors raised by the core table operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// `merge` was called with no tables at all.
    #[error("no input tables to merge")]
    EmptyInput,

    /// A selected column is not present in its table.
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
