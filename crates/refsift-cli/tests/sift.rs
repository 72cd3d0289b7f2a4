//! End-to-end sift runs over real files.

use std::fs;

use refsift_cli::cli::SiftArgs;
use refsift_cli::commands::run_sift;

fn write_file(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn sifts_two_data_files_against_a_reference() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write_file(dir.path(), "reference.csv", "code\nA1\n\"b2 \"\nC3\n");
    let first = write_file(dir.path(), "one.csv", "value,site\na1,S1\nX9,S2\n");
    let second = write_file(dir.path(), "two.csv", "value,visit\nB2,V1\nc3,V2\n");
    let output_dir = dir.path().join("out");

    let summary = run_sift(&SiftArgs {
        reference,
        reference_column: "code".to_string(),
        data_column: "value".to_string(),
        output_dir: Some(output_dir.clone()),
        data_files: vec![first, second],
    })
    .unwrap();

    assert_eq!(summary.existing_rows, 3);
    assert_eq!(summary.missing_rows, 1);

    // Merged column union is [value, site, visit]; unmatched cells are empty.
    let missing = fs::read_to_string(output_dir.join("missing_records.csv")).unwrap();
    assert_eq!(missing, "value,site,visit\nX9,S2,\n");

    let existing = fs::read_to_string(output_dir.join("existing_records.csv")).unwrap();
    assert_eq!(existing, "value,site,visit\na1,S1,\nB2,,V1\nc3,,V2\n");
}

#[test]
fn missing_column_is_reported_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write_file(dir.path(), "reference.csv", "code\nA1\n");
    let data = write_file(dir.path(), "data.csv", "value\na1\n");

    let error = run_sift(&SiftArgs {
        reference,
        reference_column: "code".to_string(),
        data_column: "serial".to_string(),
        output_dir: Some(dir.path().join("out")),
        data_files: vec![data],
    })
    .unwrap_err();

    assert!(error.to_string().contains("serial"));
}

#[test]
fn unsupported_data_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let reference = write_file(dir.path(), "reference.csv", "code\nA1\n");
    let data = write_file(dir.path(), "data.tsv", "value\ta1\n");

    let error = run_sift(&SiftArgs {
        reference,
        reference_column: "code".to_string(),
        data_column: "value".to_string(),
        output_dir: None,
        data_files: vec![data],
    })
    .unwrap_err();

    assert!(format!("{error:#}").contains("unsupported file format"));
}
