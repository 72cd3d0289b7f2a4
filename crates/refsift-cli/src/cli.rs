//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "refsift",
    version,
    about = "Sift data files against a reference list",
    long_about = "Compare one or more data tables (CSV/Excel) against a reference\n\
                  table: rows whose chosen column value appears in the reference's\n\
                  chosen column are 'existing', the rest are 'missing'. Matching is\n\
                  whitespace-trimmed and case-insensitive."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the column names of a tabular file.
    Columns(ColumnsArgs),

    /// Partition data files into missing/existing record sets.
    Sift(SiftArgs),

    /// Run the upload/select/download web service.
    Serve(ServeArgs),
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Tabular file to inspect (.csv, .xls or .xlsx).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct SiftArgs {
    /// Reference file holding the known values.
    #[arg(long = "reference", value_name = "FILE")]
    pub reference: PathBuf,

    /// Column of the reference file to match against.
    #[arg(long = "reference-column", value_name = "COL")]
    pub reference_column: String,

    /// Column of the (merged) data files to look up.
    #[arg(long = "data-column", value_name = "COL")]
    pub data_column: String,

    /// Directory for missing_records.csv and existing_records.csv
    /// (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Data files to sift; multiple files are concatenated by column union.
    #[arg(value_name = "DATA_FILES", required = true)]
    pub data_files: Vec<PathBuf>,
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Optional TOML config file (bind address, upload limit).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
