//! Table serialization back to delimited text.
//!
//! Comma-separated, one row per line, header line first, RFC 4180 quoting
//! for fields containing the separator, quotes, or line breaks. `Missing`
//! cells are written as empty fields, so a serialized table re-loads to an
//! equal table as long as no text cell is the empty string.

use refsift_model::{CellValue, Table};
use thiserror::Error;

/// Errors that can occur while serializing a table.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write delimited text: {0}")]
    Write(#[from] csv::Error),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, OutputError>;

/// Serialize a table to CSV bytes.
pub fn to_csv_bytes(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(table.columns().iter().map(|column| column.as_str()))?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|cell| match cell {
            CellValue::Text(text) => text.as_str(),
            CellValue::Missing => "",
        }))?;
    }

    writer
        .into_inner()
        .map_err(|error| OutputError::Write(error.into_error().into()))
}

#[cfg(test)]
mod tests {
    use refsift_model::ColumnName;

    use super::*;

    fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
        let columns = columns
            .iter()
            .map(|name| ColumnName::new(*name).unwrap())
            .collect();
        let mut table = Table::new(columns).unwrap();
        for row in rows {
            let cells = row.iter().map(|cell| CellValue::from_field(*cell)).collect();
            table.push_row(cells).unwrap();
        }
        table
    }

    #[test]
    fn writes_header_and_rows() {
        let table = table(&["id", "name"], &[&["1", "Alice"], &["2", ""]]);
        let bytes = to_csv_bytes(&table).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "id,name\n1,Alice\n2,\n"
        );
    }

    #[test]
    fn quotes_separator_quote_and_newline() {
        let table = table(
            &["field"],
            &[&["has, comma"], &["has \"quote\""], &["has\nnewline"]],
        );
        let bytes = to_csv_bytes(&table).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "field\n\"has, comma\"\n\"has \"\"quote\"\"\"\n\"has\nnewline\"\n"
        );
    }

    #[test]
    fn header_only_table_serializes() {
        let table = table(&["a", "b"], &[]);
        let bytes = to_csv_bytes(&table).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "a,b\n");
    }
}
