//! Integration tests for CSV loading.

use refsift_ingest::{FileFormat, IngestError, load, load_named};
use refsift_model::CellValue;

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

#[test]
fn loads_simple_csv() {
    let bytes = b"id,name\n1,Alice\n2,Bob\n";
    let table = load(bytes, FileFormat::Csv).unwrap();

    assert_eq!(
        table
            .columns()
            .iter()
            .map(|column| column.as_str())
            .collect::<Vec<_>>(),
        vec!["id", "name"]
    );
    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.rows()[0], vec![text("1"), text("Alice")]);
    assert_eq!(table.rows()[1], vec![text("2"), text("Bob")]);
}

#[test]
fn preserves_cell_whitespace_and_quoting() {
    let bytes = b"code,comment\n\" a1 \",\"has, comma\"\n";
    let table = load(bytes, FileFormat::Csv).unwrap();
    assert_eq!(table.rows()[0], vec![text(" a1 "), text("has, comma")]);
}

#[test]
fn empty_fields_load_as_missing() {
    let bytes = b"id,age\n1,\n,30\n";
    let table = load(bytes, FileFormat::Csv).unwrap();
    assert_eq!(table.rows()[0], vec![text("1"), CellValue::Missing]);
    assert_eq!(table.rows()[1], vec![CellValue::Missing, text("30")]);
}

#[test]
fn strips_bom_from_first_header() {
    let bytes = "\u{feff}id,name\n1,A\n".as_bytes();
    let table = load(bytes, FileFormat::Csv).unwrap();
    assert_eq!(table.columns()[0].as_str(), "id");
}

#[test]
fn ragged_rows_are_a_parse_error() {
    let bytes = b"id,name\n1,Alice,extra\n";
    let err = load(bytes, FileFormat::Csv).unwrap_err();
    assert!(matches!(
        err,
        IngestError::Parse {
            format: FileFormat::Csv,
            ..
        }
    ));
}

#[test]
fn duplicate_headers_are_a_parse_error() {
    let bytes = b"id,id\n1,2\n";
    let err = load(bytes, FileFormat::Csv).unwrap_err();
    assert!(matches!(err, IngestError::Parse { .. }));
}

#[test]
fn headers_differing_only_in_padding_collide() {
    // Column names trim outer whitespace, so " a " and "a" are the same
    // column and the file is rejected instead of loading both verbatim.
    let bytes = b"\" a \",a\n1,2\n";
    let err = load(bytes, FileFormat::Csv).unwrap_err();
    assert!(matches!(err, IngestError::Parse { .. }));

    let table = load(b" id ,name\n1,A\n", FileFormat::Csv).unwrap();
    assert_eq!(table.columns()[0].as_str(), "id");
}

#[test]
fn empty_input_has_no_header() {
    let err = load(b"", FileFormat::Csv).unwrap_err();
    assert!(matches!(err, IngestError::EmptyTable { .. }));
}

#[test]
fn header_only_csv_is_an_empty_table_with_columns() {
    let table = load(b"id,name\n", FileFormat::Csv).unwrap();
    assert_eq!(table.n_columns(), 2);
    assert_eq!(table.n_rows(), 0);
}

#[test]
fn load_named_uses_the_extension() {
    let table = load_named(b"id\n1\n", "Upload.CSV").unwrap();
    assert_eq!(table.n_rows(), 1);

    let err = load_named(b"id\n1\n", "upload.txt").unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn loads_xlsx_workbook() {
    // Sheet "Records": header [id, name, score], one stray cell right of
    // the header row, one short row, numeric cells 7 and 1.5. A second
    // sheet ("Notes") holds unrelated content.
    let bytes = include_bytes!("fixtures/records.xlsx");
    let table = load(bytes, FileFormat::Xlsx).unwrap();

    // Only the first worksheet is read, and the header stops at the last
    // named column, dropping the stray value under the unnamed one.
    assert_eq!(
        table
            .columns()
            .iter()
            .map(|column| column.as_str())
            .collect::<Vec<_>>(),
        vec!["id", "name", "score"]
    );
    assert_eq!(table.n_rows(), 3);

    // Integral floats render without the trailing fraction.
    assert_eq!(table.rows()[0], vec![text("1"), text("Alice"), text("7")]);
    // A row with only its first cell is padded out with Missing.
    assert_eq!(
        table.rows()[1],
        vec![text("2"), CellValue::Missing, CellValue::Missing]
    );
    assert_eq!(table.rows()[2], vec![text("3"), text("Bob"), text("1.5")]);
}

#[test]
fn xlsx_rejects_garbage_bytes() {
    let err = load(b"not a zip archive", FileFormat::Xlsx).unwrap_err();
    assert!(matches!(
        err,
        IngestError::Parse {
            format: FileFormat::Xlsx,
            ..
        }
    ));
}
