//! Tabular file ingestion.
//!
//! Converts an uploaded byte stream plus a declared [`FileFormat`] into a
//! [`refsift_model::Table`]. All cell values are kept as verbatim strings
//! (numbers in spreadsheets are rendered to their display text); empty
//! cells become `Missing`. No trimming or case folding happens here;
//! normalization is a comparison-time concern, not a load-time one.

mod error;
mod excel;
mod format;
mod text;

pub use error::{IngestError, Result};
pub use format::FileFormat;

use refsift_model::Table;

/// Parse `bytes` as a table in the declared format.
pub fn load(bytes: &[u8], format: FileFormat) -> Result<Table> {
    let table = match format {
        FileFormat::Csv => text::read_csv(bytes)?,
        FileFormat::Xls => excel::read_xls(bytes)?,
        FileFormat::Xlsx => excel::read_xlsx(bytes)?,
    };
    tracing::debug!(
        %format,
        columns = table.n_columns(),
        rows = table.n_rows(),
        "loaded table"
    );
    Ok(table)
}

/// Parse `bytes` using the format derived from `file_name`'s extension.
pub fn load_named(bytes: &[u8], file_name: &str) -> Result<Table> {
    load(bytes, FileFormat::from_file_name(file_name)?)
}
