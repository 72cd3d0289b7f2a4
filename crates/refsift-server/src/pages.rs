//! Server-rendered HTML pages.

use refsift_model::ColumnName;
use refsift_session::SessionId;

pub const UPLOAD_HTML: &str = include_str!("ui/upload.html");

/// Minimal HTML escaping for text and attribute positions.
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

fn options(columns: &[ColumnName]) -> String {
    columns
        .iter()
        .map(|column| {
            let name = escape(column.as_str());
            format!("<option value=\"{name}\">{name}</option>")
        })
        .collect()
}

/// Column-selection page shown after a successful upload.
pub fn select_columns(
    session: SessionId,
    data_columns: &[ColumnName],
    reference_columns: &[ColumnName],
) -> String {
    format!(
        "<!doctype html><html><head><title>refsift - select columns</title></head><body>\
         <h1>Select columns to compare</h1>\
         <form method=\"post\" action=\"/process\">\
         <input type=\"hidden\" name=\"session_id\" value=\"{session}\">\
         <label>Data column <select name=\"data_column\">{data}</select></label>\
         <label>Reference column <select name=\"reference_column\">{reference}</select></label>\
         <button type=\"submit\">Compare</button>\
         </form></body></html>",
        data = options(data_columns),
        reference = options(reference_columns),
    )
}

/// Download page shown after the column choice is stored.
pub fn download_links(session: SessionId) -> String {
    format!(
        "<!doctype html><html><head><title>refsift - downloads</title></head><body>\
         <h1>Results ready</h1>\
         <ul>\
         <li><a href=\"/download/missing?session={session}\">Download missing records</a></li>\
         <li><a href=\"/download/existing?session={session}\">Download existing records</a></li>\
         </ul></body></html>"
    )
}
