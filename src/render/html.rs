//! HTML table renderer.

use crate::style::TableFormat;
use crate::table::Table;

/// Render `table` as an HTML `<table>` fragment. Column widths and
/// alignment only shape the source text; presentation is left to CSS.
pub(crate) fn render(table: &Table, fmt: &TableFormat) -> String {
    let (body, _) = super::framed_body(table, fmt, None);
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push("<table class=\"simpletable\">".to_string());
    lines.extend(body);
    lines.push("</table>".to_string());
    lines.join("\n")
}
