//! Delimited-text (CSV) parsing.

use csv::ReaderBuilder;
use refsift_model::{CellValue, ColumnName, Table};

use crate::{FileFormat, IngestError, Result};

fn parse_error(message: impl Into<String>) -> IngestError {
    IngestError::Parse {
        format: FileFormat::Csv,
        message: message.into(),
    }
}

/// Read CSV bytes into a table.
///
/// The first record is the header; a UTF-8 BOM on the first header cell is
/// stripped. Rows with a cell count different from the header are rejected.
pub fn read_csv(bytes: &[u8]) -> Result<Table> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|error| parse_error(error.to_string()))?
        .clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(IngestError::EmptyTable {
            format: FileFormat::Csv,
        });
    }

    let mut columns = Vec::with_capacity(headers.len());
    for (index, header) in headers.iter().enumerate() {
        let header = if index == 0 {
            header.trim_start_matches('\u{feff}')
        } else {
            header
        };
        let column = ColumnName::new(header)
            .map_err(|error| parse_error(format!("header {}: {error}", index + 1)))?;
        columns.push(column);
    }

    let mut table = Table::new(columns).map_err(|error| parse_error(error.to_string()))?;
    for record in reader.records() {
        let record = record.map_err(|error| parse_error(error.to_string()))?;
        let cells = record.iter().map(CellValue::from_field).collect();
        table
            .push_row(cells)
            .map_err(|error| parse_error(error.to_string()))?;
    }
    Ok(table)
}
