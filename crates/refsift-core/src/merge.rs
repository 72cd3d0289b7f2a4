use std::collections::HashMap;

use refsift_model::{CellValue, ColumnName, Table};

use crate::{CoreError, Result};

/// Concatenate tables into one.
///
/// The output header is the union of all input headers in first-seen order;
/// rows follow in input order. A row from a table lacking one of the union
/// columns gets `Missing` in that position. Deterministic: the same inputs
/// in the same order always produce the same output.
pub fn merge(tables: &[Table]) -> Result<Table> {
    if tables.is_empty() {
        return Err(CoreError::EmptyInput);
    }

    let mut columns: Vec<ColumnName> = Vec::new();
    let mut positions: HashMap<ColumnName, usize> = HashMap::new();
    for table in tables {
        for column in table.columns() {
            if !positions.contains_key(column) {
                positions.insert(column.clone(), columns.len());
                columns.push(column.clone());
            }
        }
    }

    let width = columns.len();
    // Union columns are unique by construction.
    let mut merged = Table::new(columns).expect("union columns are unique");
    for table in tables {
        let targets: Vec<usize> = table
            .columns()
            .iter()
            .map(|column| positions[column])
            .collect();
        for row in table.rows() {
            let mut cells = vec![CellValue::Missing; width];
            for (cell, &target) in row.iter().zip(&targets) {
                cells[target] = cell.clone();
            }
            merged.push_row(cells).expect("merged row matches width");
        }
    }

    tracing::debug!(
        inputs = tables.len(),
        columns = merged.n_columns(),
        rows = merged.n_rows(),
        "merged tables"
    );
    Ok(merged)
}
