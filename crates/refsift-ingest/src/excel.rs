//! Spreadsheet (XLS/XLSX) parsing via calamine.
//!
//! Only the first worksheet is read: the upload flow treats one file as one
//! table. Values are rendered to display text so that downstream comparison
//! stays a pure string operation.

use std::fmt::Display;
use std::io::Cursor;

use calamine::{Data, Range, Reader, Xls, Xlsx};
use refsift_model::{CellValue, ColumnName, Table};

use crate::{FileFormat, IngestError, Result};

pub fn read_xls(bytes: &[u8]) -> Result<Table> {
    let workbook =
        Xls::new(Cursor::new(bytes)).map_err(|error| parse_error(FileFormat::Xls, error))?;
    read_first_sheet(workbook, FileFormat::Xls)
}

pub fn read_xlsx(bytes: &[u8]) -> Result<Table> {
    let workbook =
        Xlsx::new(Cursor::new(bytes)).map_err(|error| parse_error(FileFormat::Xlsx, error))?;
    read_first_sheet(workbook, FileFormat::Xlsx)
}

fn parse_error(format: FileFormat, error: impl Display) -> IngestError {
    IngestError::Parse {
        format,
        message: error.to_string(),
    }
}

fn read_first_sheet<'a, R>(mut workbook: R, format: FileFormat) -> Result<Table>
where
    R: Reader<Cursor<&'a [u8]>>,
    R::Error: Display,
{
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(IngestError::EmptyTable { format })?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|error| parse_error(format, error))?;
    range_to_table(&range, format)
}

fn range_to_table(range: &Range<Data>, format: FileFormat) -> Result<Table> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(IngestError::EmptyTable { format });
    };

    // Drop trailing stray cells beyond the last named header.
    let width = header
        .iter()
        .rposition(|cell| !matches!(cell, Data::Empty))
        .map(|last| last + 1)
        .ok_or(IngestError::EmptyTable { format })?;

    let mut columns = Vec::with_capacity(width);
    for (index, cell) in header.iter().take(width).enumerate() {
        let name = match data_to_field(cell) {
            CellValue::Text(text) => text,
            CellValue::Missing => String::new(),
        };
        let column = ColumnName::new(name)
            .map_err(|error| parse_error(format, format_args!("header {}: {error}", index + 1)))?;
        columns.push(column);
    }

    let mut table = Table::new(columns).map_err(|error| parse_error(format, error))?;
    for row in rows {
        let mut cells: Vec<CellValue> = row.iter().take(width).map(data_to_field).collect();
        cells.resize(width, CellValue::Missing);
        table
            .push_row(cells)
            .map_err(|error| parse_error(format, error))?;
    }
    Ok(table)
}

/// Render a spreadsheet cell to its string form.
///
/// Floats with no fractional part print as integers, matching what a user
/// sees in the sheet (`7`, not `7.0`).
fn data_to_field(value: &Data) -> CellValue {
    match value {
        Data::Empty => CellValue::Missing,
        Data::String(text) => CellValue::from_field(text.clone()),
        Data::Float(value) => CellValue::Text(format_numeric(*value)),
        Data::Int(value) => CellValue::Text(value.to_string()),
        Data::Bool(value) => CellValue::Text(if *value { "1" } else { "0" }.to_string()),
        Data::DateTime(value) => CellValue::Text(format_numeric(value.as_f64())),
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::from_field(text.clone()),
        Data::Error(error) => CellValue::Text(error.to_string()),
    }
}

fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
