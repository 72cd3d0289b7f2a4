use std::collections::HashSet;

use crate::{ColumnName, ModelError};

/// A single cell: either text or explicitly absent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Wrap a string, treating the empty string as [`CellValue::Missing`].
    ///
    /// Delimited text has no way to distinguish an empty field from an
    /// absent one, so the model collapses the two at the boundary.
    pub fn from_field(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Missing
        } else {
            Self::Text(value)
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

/// An in-memory table: uniquely named columns in first-seen order, plus
/// ordered rows holding exactly one cell per column.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    columns: Vec<ColumnName>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create an empty table with the given header.
    pub fn new(columns: Vec<ColumnName>) -> Result<Self, ModelError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.clone()) {
                return Err(ModelError::DuplicateColumn {
                    column: column.as_str().to_string(),
                });
            }
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Append a row. The row must carry exactly one cell per column.
    pub fn push_row(&mut self, cells: Vec<CellValue>) -> Result<(), ModelError> {
        if cells.len() != self.columns.len() {
            return Err(ModelError::RowWidthMismatch {
                expected: self.columns.len(),
                actual: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    pub fn columns(&self) -> &[ColumnName] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by exact name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<ColumnName> {
        names
            .iter()
            .map(|name| ColumnName::new(*name).unwrap())
            .collect()
    }

    #[test]
    fn rejects_duplicate_columns() {
        let err = Table::new(columns(&["id", "name", "id"])).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateColumn { column } if column == "id"));
    }

    #[test]
    fn rejects_row_width_mismatch() {
        let mut table = Table::new(columns(&["id", "name"])).unwrap();
        let err = table
            .push_row(vec![CellValue::Text("1".to_string())])
            .unwrap_err();
        assert!(matches!(
            err,
            ModelError::RowWidthMismatch {
                expected: 2,
                actual: 1
            }
        ));
        assert_eq!(table.n_rows(), 0);
    }

    #[test]
    fn column_index_is_exact_match() {
        let table = Table::new(columns(&["Id", "Name"])).unwrap();
        assert_eq!(table.column_index("Id"), Some(0));
        assert_eq!(table.column_index("id"), None);
    }

    #[test]
    fn empty_field_becomes_missing() {
        assert_eq!(CellValue::from_field(""), CellValue::Missing);
        assert_eq!(
            CellValue::from_field("x"),
            CellValue::Text("x".to_string())
        );
    }

    #[test]
    fn table_serializes() {
        let mut table = Table::new(columns(&["id"])).unwrap();
        table
            .push_row(vec![CellValue::Text("A".to_string())])
            .unwrap();
        let json = serde_json::to_string(&table).expect("serialize table");
        let round: Table = serde_json::from_str(&json).expect("deserialize table");
        assert_eq!(round, table);
    }
}
