//! Tabular data model shared by all refsift crates.
//!
//! A [`Table`] is an ordered list of uniquely named columns plus ordered
//! rows of string-or-null cells. Cells are never typed beyond
//! [`CellValue::Text`] / [`CellValue::Missing`]: every comparison downstream
//! is a pure string operation, so `"007"` and `7` can never silently match.

mod error;
mod ids;
mod table;

pub use error::{ModelError, Result};
pub use ids::ColumnName;
pub use table::{CellValue, Table};
