use thiserror::Error;

/// Errors raised when constructing or mutating a [`crate::Table`].
#[derive(Debug, Error)]
pub enum ModelError {
    /// Column name is empty (or whitespace only).
    #[error("column name is empty")]
    EmptyColumnName,

    /// The same column name appears twice in a table header.
    #[error("duplicate column '{column}'")]
    DuplicateColumn { column: String },

    /// A row does not have exactly one cell per column.
    #[error("row has {actual} cells, table has {expected} columns")]
    RowWidthMismatch { expected: usize, actual: usize },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
