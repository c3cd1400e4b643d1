//! Plain-text renderer.

use crate::style::TableFormat;
use crate::table::Table;

/// Render `table` as plain text. A `missing` override re-skins every
/// sentinel-missing cell for this render only.
pub(crate) fn render(table: &Table, fmt: &TableFormat, missing: Option<&str>) -> String {
    let (body, width) = super::framed_body(table, fmt, missing);
    let mut lines = Vec::with_capacity(body.len() + 1);
    if let Some(title) = table.title() {
        lines.push(fmt.title_align.pad(title, width));
    }
    lines.extend(body);
    lines.join("\n")
}
