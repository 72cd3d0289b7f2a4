use std::collections::HashSet;

use refsift_model::Table;

use crate::{CoreError, Result, normalize};

/// Result of a set-membership partition: two tables with the data table's
/// header, together holding every data row exactly once.
#[derive(Debug, Clone)]
pub struct Partition {
    /// Rows whose normalized value appears in the reference set.
    pub existing: Table,
    /// Rows whose normalized value does not.
    pub missing: Table,
}

/// Split `data` by membership of its `data_column` values in the normalized
/// value set of `reference`'s `reference_column`.
///
/// Both output tables preserve `data`'s column list and relative row order.
/// Missing data values always land in `missing`. The reference set is built
/// once as a hash set, so the whole partition is O(rows_ref + rows_data).
pub fn partition(
    data: &Table,
    data_column: &str,
    reference: &Table,
    reference_column: &str,
) -> Result<Partition> {
    let data_index = data
        .column_index(data_column)
        .ok_or_else(|| CoreError::ColumnNotFound {
            column: data_column.to_string(),
        })?;
    let reference_index =
        reference
            .column_index(reference_column)
            .ok_or_else(|| CoreError::ColumnNotFound {
                column: reference_column.to_string(),
            })?;

    let reference_set: HashSet<String> = reference
        .rows()
        .iter()
        .filter_map(|row| normalize(&row[reference_index]))
        .collect();

    let columns = data.columns().to_vec();
    let mut existing = Table::new(columns.clone()).expect("data columns are unique");
    let mut missing = Table::new(columns).expect("data columns are unique");

    for row in data.rows() {
        let is_member = normalize(&row[data_index])
            .is_some_and(|key| reference_set.contains(&key));
        let target = if is_member { &mut existing } else { &mut missing };
        target
            .push_row(row.clone())
            .expect("row width matches data table");
    }

    tracing::debug!(
        existing = existing.n_rows(),
        missing = missing.n_rows(),
        reference_values = reference_set.len(),
        "partitioned table"
    );
    Ok(Partition { existing, missing })
}
