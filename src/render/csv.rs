//! CSV renderer.

use crate::style::TableFormat;
use crate::table::Table;

/// Render `table` as comma-separated values: one header line, one line
/// per data row, unpadded cells with quoted header and stub text.
pub(crate) fn render(table: &Table, fmt: &TableFormat) -> String {
    let (body, _) = super::framed_body(table, fmt, None);
    body.join("\n")
}
