use std::fmt;

use crate::ModelError;

/// A validated column name.
///
/// Column identity is exact: names are kept verbatim apart from trimming
/// outer whitespace at construction, and comparison is case-sensitive.
/// Value normalization never applies to column names.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ColumnName(String);

impl ColumnName {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyColumnName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ColumnName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_names() {
        assert!(ColumnName::new("").is_err());
        assert!(ColumnName::new("   ").is_err());
    }

    #[test]
    fn trims_outer_whitespace_only() {
        let name = ColumnName::new("  subject id ").unwrap();
        assert_eq!(name.as_str(), "subject id");
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let upper = ColumnName::new("ID").unwrap();
        let lower = ColumnName::new("id").unwrap();
        assert_ne!(upper, lower);
    }
}
