use std::fmt;

use crate::IngestError;

/// Declared format of an uploaded tabular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Comma-separated text.
    Csv,
    /// Legacy Excel 97-2003 (BIFF).
    Xls,
    /// Office Open XML spreadsheet.
    Xlsx,
}

impl FileFormat {
    /// Derive the format tag from a file name's extension, case-insensitively.
    pub fn from_file_name(name: &str) -> Result<Self, IngestError> {
        let extension = name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "xls" => Ok(Self::Xls),
            "xlsx" => Ok(Self::Xlsx),
            _ => Err(IngestError::UnsupportedFormat {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Csv => "CSV",
            Self::Xls => "XLS",
            Self::Xlsx => "XLSX",
        };
        f.write_str(label)
    }
}
