use refsift_model::CellValue;

/// Normalize text for membership comparison: trim outer whitespace, then
/// uppercase. Exactly this transform and nothing more: internal whitespace
/// and non-letter characters are untouched.
pub fn normalize_text(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Comparison key for a cell.
///
/// `Missing` has no key: it is distinct from every string, including the
/// empty one, so missing values never match anything.
pub fn normalize(value: &CellValue) -> Option<String> {
    value.as_text().map(normalize_text)
}
