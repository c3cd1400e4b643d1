//! Rendering: shared layout machinery and the per-target renderers.
//!
//! Every renderer works the same way: resolve each cell to its display
//! text under the active [`TableFormat`], compute column widths over the
//! resolved grid, pad and join each row, then frame the body with the
//! format's decorations. All of it is a pure function of the table state
//! at call time; nothing is cached between renders.

pub(crate) mod csv;
pub(crate) mod html;
pub(crate) mod latex;
pub(crate) mod text;

use crate::cell::Cell;
use crate::style::TableFormat;
use crate::table::Table;
use crate::value::DataFormat;

/// Resolve a data cell to its display text under `fmt`.
///
/// Precedence: a render-time `missing` override applies to
/// sentinel-missing values only; an explicit label beats the stored
/// placeholder and the numeric formatting; a sentinel-missing value with
/// no label falls back to the format's placeholder.
pub(crate) fn cell_text(cell: &Cell, fmt: &TableFormat, missing: Option<&str>) -> String {
    if cell.is_missing() {
        if let Some(over) = missing {
            return fmt.data_wrap.apply(over);
        }
        if let Some(label) = &cell.label {
            return fmt.data_wrap.apply(label);
        }
        return fmt.data_wrap.apply(&fmt.missing);
    }
    if let Some(label) = &cell.label {
        return fmt.data_wrap.apply(label);
    }
    let text = data_format_for(fmt, cell.kind).apply(&cell.value);
    fmt.data_wrap.apply(&text)
}

/// The data format selected by a cell kind, wrapping around the
/// configured list. An empty list behaves as `[General]`.
fn data_format_for(fmt: &TableFormat, kind: usize) -> DataFormat {
    if fmt.data_fmts.is_empty() {
        DataFormat::General
    } else {
        fmt.data_fmts[kind % fmt.data_fmts.len()]
    }
}

/// The display grid: header row first, then one row per data row. The
/// first column holds the empty header slot and the stub labels.
fn display_grid(table: &Table, fmt: &TableFormat, missing: Option<&str>) -> Vec<Vec<String>> {
    let mut grid = Vec::with_capacity(table.nrows() + 1);

    let mut header = Vec::with_capacity(table.ncols() + 1);
    header.push(fmt.empty_cell.clone());
    for cell in &table.header().cells {
        let text = cell
            .label
            .clone()
            .unwrap_or_else(|| DataFormat::General.apply(&cell.value));
        header.push(fmt.header_wrap.apply(&text));
    }
    grid.push(header);

    for (stub, row) in table.stubs().iter().zip(table.rows()) {
        let mut line = Vec::with_capacity(table.ncols() + 1);
        line.push(fmt.stub_wrap.apply(stub));
        for cell in &row.cells {
            line.push(cell_text(cell, fmt, missing));
        }
        grid.push(line);
    }
    grid
}

/// Column widths: the widest display text in each column, floored at
/// the format minimum.
fn column_widths(grid: &[Vec<String>], fmt: &TableFormat) -> Vec<usize> {
    let ncols = grid.first().map_or(0, Vec::len);
    let mut widths = vec![fmt.min_width; ncols];
    for row in grid {
        for (width, text) in widths.iter_mut().zip(row) {
            *width = (*width).max(text.chars().count());
        }
    }
    widths
}

/// Pad and join one display row. The header row aligns every slot with
/// `header_align`; data rows align the stub with `stub_align` and the
/// rest with `data_align`.
fn assemble_row(texts: &[String], widths: &[usize], fmt: &TableFormat, is_header: bool) -> String {
    let cells: Vec<String> = texts
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(col, (text, width))| {
            let align = if is_header {
                fmt.header_align
            } else if col == 0 {
                fmt.stub_align
            } else {
                fmt.data_align
            };
            if fmt.pad_cells {
                align.pad(text, *width)
            } else {
                text.clone()
            }
        })
        .collect();
    format!("{}{}{}", fmt.row_pre, cells.join(&fmt.colsep), fmt.row_post)
}

/// The table body framed by its decorations, plus the rendered row
/// width used to size `Fill` rules and pad the title.
pub(crate) fn framed_body(
    table: &Table,
    fmt: &TableFormat,
    missing: Option<&str>,
) -> (Vec<String>, usize) {
    let grid = display_grid(table, fmt, missing);
    let widths = column_widths(&grid, fmt);
    let body: Vec<String> = grid
        .iter()
        .enumerate()
        .map(|(i, texts)| assemble_row(texts, &widths, fmt, i == 0))
        .collect();
    let width = body.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(body.len() + 3);
    if let Some(dec) = fmt.table_dec_above.render(width) {
        lines.push(dec);
    }
    let mut rows = body.into_iter();
    if let Some(header) = rows.next() {
        lines.push(header);
        if let Some(dec) = fmt.header_dec_below.render(width) {
            lines.push(dec);
        }
    }
    lines.extend(rows);
    if let Some(dec) = fmt.table_dec_below.render(width) {
        lines.push(dec);
    }
    (lines, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Wrap;
    use crate::value::CellValue;

    fn fmt_with(data_fmts: Vec<DataFormat>) -> TableFormat {
        TableFormat::text().with_data_fmts(data_fmts)
    }

    #[test]
    fn test_cell_text_numeric() {
        let fmt = fmt_with(vec![DataFormat::Fixed(2), DataFormat::Integer]);
        assert_eq!(cell_text(&Cell::new(0.0, 0), &fmt, None), "0.00");
        assert_eq!(cell_text(&Cell::new(3.333, 1), &fmt, None), "3");
    }

    #[test]
    fn test_cell_text_kind_wraps_around() {
        let fmt = fmt_with(vec![DataFormat::Fixed(1)]);
        // kind 3 cycles back onto the single configured format
        assert_eq!(cell_text(&Cell::new(2, 3), &fmt, None), "2.0");
    }

    #[test]
    fn test_cell_text_empty_format_list() {
        let fmt = fmt_with(vec![]);
        assert_eq!(cell_text(&Cell::new(1.5, 0), &fmt, None), "1.5");
    }

    #[test]
    fn test_cell_text_label_beats_formatting() {
        let fmt = fmt_with(vec![DataFormat::Fixed(2)]);
        let mut cell = Cell::new(1.0, 0);
        cell.label = Some("one".to_string());
        assert_eq!(cell_text(&cell, &fmt, None), "one");
    }

    #[test]
    fn test_cell_text_missing_precedence() {
        let fmt = fmt_with(vec![DataFormat::Fixed(2)]);
        let mut cell = Cell::new(f64::NAN, 0);

        // placeholder when nothing else applies
        assert_eq!(cell_text(&cell, &fmt, None), "--");
        // label beats the placeholder
        cell.label = Some("missing".to_string());
        assert_eq!(cell_text(&cell, &fmt, None), "missing");
        // render-time override beats the label, for sentinel values only
        assert_eq!(cell_text(&cell, &fmt, Some("??")), "??");
        let mut labelled = Cell::new(1.0, 0);
        labelled.label = Some("one".to_string());
        assert_eq!(cell_text(&labelled, &fmt, Some("??")), "one");
    }

    #[test]
    fn test_cell_text_goes_through_data_wrap() {
        let mut fmt = fmt_with(vec![DataFormat::Integer]);
        fmt.data_wrap = Wrap::new("<td>", "</td>");
        assert_eq!(cell_text(&Cell::new(7, 0), &fmt, None), "<td>7</td>");
        assert_eq!(
            cell_text(&Cell::new(f64::NAN, 0), &fmt, Some("--")),
            "<td>--</td>"
        );
    }

    #[test]
    fn test_column_widths_cover_header_and_cells() {
        let table = Table::new(
            vec![
                vec![CellValue::from(1000), CellValue::from(2)],
                vec![CellValue::from(3), CellValue::from(4)],
            ],
            vec!["h", "header"],
            vec!["stub", "s"],
        )
        .unwrap();
        let fmt = TableFormat::text();
        let grid = display_grid(&table, &fmt, None);
        let widths = column_widths(&grid, &fmt);
        assert_eq!(widths, vec![4, 4, 6]);
        for row in &grid {
            for (text, width) in row.iter().zip(&widths) {
                assert!(text.chars().count() <= *width);
            }
        }
    }

    #[test]
    fn test_min_width_floor() {
        let table = Table::new(vec![vec![CellValue::from(1)]], vec!["h"], vec!["s"]).unwrap();
        let fmt = TableFormat::text().with_min_width(8);
        let grid = display_grid(&table, &fmt, None);
        assert_eq!(column_widths(&grid, &fmt), vec![8, 8]);
    }
}
