//! Command implementations.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use comfy_table::{ContentArrangement, Table as DisplayTable, presets};
use tracing::info;

use refsift_core::{merge, partition};
use refsift_ingest::load_named;
use refsift_model::Table;
use refsift_output::to_csv_bytes;
use refsift_server::ServerConfig;
use refsift_session::TempDirStore;

use crate::cli::{ColumnsArgs, ServeArgs, SiftArgs};

fn load_file(path: &Path) -> Result<Table> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    load_named(&bytes, &name).with_context(|| format!("failed to load {}", path.display()))
}

/// `refsift columns FILE`: print the header of a tabular file.
pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let table = load_file(&args.file)?;

    let mut display = DisplayTable::new();
    display
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Column"]);
    for (index, column) in table.columns().iter().enumerate() {
        display.add_row(vec![(index + 1).to_string(), column.as_str().to_string()]);
    }
    println!("{display}");
    println!("{} rows", table.n_rows());
    Ok(())
}

/// What `refsift sift` produced, for the end-of-run summary.
#[derive(Debug)]
pub struct SiftSummary {
    pub existing_rows: usize,
    pub missing_rows: usize,
    pub existing_path: PathBuf,
    pub missing_path: PathBuf,
}

/// `refsift sift`: load, merge, partition, and write both record sets.
pub fn run_sift(args: &SiftArgs) -> Result<SiftSummary> {
    let reference = load_file(&args.reference)?;
    info!(
        file = %args.reference.display(),
        rows = reference.n_rows(),
        "loaded reference table"
    );

    let mut data_tables = Vec::with_capacity(args.data_files.len());
    for path in &args.data_files {
        let table = load_file(path)?;
        info!(file = %path.display(), rows = table.n_rows(), "loaded data table");
        data_tables.push(table);
    }
    let data = merge(&data_tables)?;

    let result = partition(
        &data,
        &args.data_column,
        &reference,
        &args.reference_column,
    )?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let missing_path = output_dir.join("missing_records.csv");
    let existing_path = output_dir.join("existing_records.csv");
    fs::write(&missing_path, to_csv_bytes(&result.missing)?)
        .with_context(|| format!("failed to write {}", missing_path.display()))?;
    fs::write(&existing_path, to_csv_bytes(&result.existing)?)
        .with_context(|| format!("failed to write {}", existing_path.display()))?;

    Ok(SiftSummary {
        existing_rows: result.existing.n_rows(),
        missing_rows: result.missing.n_rows(),
        existing_path,
        missing_path,
    })
}

/// Print the sift outcome for humans.
pub fn print_summary(summary: &SiftSummary) {
    println!(
        "missing:  {:>6} rows -> {}",
        summary.missing_rows,
        summary.missing_path.display()
    );
    println!(
        "existing: {:>6} rows -> {}",
        summary.existing_rows,
        summary.existing_path.display()
    );
}

/// `refsift serve`: run the web service until interrupted.
pub fn run_serve(args: &ServeArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    let store = Arc::new(TempDirStore::new()?);

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(refsift_server::serve(config, store))
}
