//! Table construction, mutation, and the render entry points.

use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Labeller};
use crate::error::TableError;
use crate::render;
use crate::style::{FormatSet, TableFormat, Target};
use crate::value::CellValue;
use crate::Result;

/// Ordered sequence of cells. The cell count is fixed once the owning
/// table is built; individual cells stay freely mutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Cells in column order
    pub cells: Vec<Cell>,
}

impl Row {
    /// Build a row, assigning each cell's kind from its column index.
    fn from_values(values: Vec<CellValue>) -> Self {
        Self {
            cells: values
                .into_iter()
                .enumerate()
                .map(|(col, value)| Cell::new(value, col))
                .collect(),
        }
    }

    /// Number of cells in the row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A 2-D grid of cells with header and stub labels, renderable to plain
/// text, LaTeX, HTML, or CSV.
///
/// Invariants, enforced at construction: every data row has exactly
/// `header.len()` cells, and there is one stub label per data row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    header: Row,
    stubs: Vec<String>,
    rows: Vec<Row>,
    formats: FormatSet,
}

impl Table {
    /// Build a table from a 2-D data grid, header labels, and stub
    /// (row-label) strings, with default formats for every target.
    ///
    /// Fails fast on shape mismatch: a short or long data row, or a stub
    /// count that does not match the row count. Nothing is padded.
    pub fn new<V, S>(data: Vec<Vec<V>>, header: Vec<S>, stubs: Vec<S>) -> Result<Self>
    where
        V: Into<CellValue>,
        S: Into<String>,
    {
        Self::with_formats(data, header, stubs, FormatSet::default())
    }

    /// Build a table with caller-supplied per-target formats.
    pub fn with_formats<V, S>(
        data: Vec<Vec<V>>,
        header: Vec<S>,
        stubs: Vec<S>,
        formats: FormatSet,
    ) -> Result<Self>
    where
        V: Into<CellValue>,
        S: Into<String>,
    {
        let header = Row::from_values(
            header
                .into_iter()
                .map(|h| CellValue::Text(h.into()))
                .collect(),
        );
        let stubs: Vec<String> = stubs.into_iter().map(Into::into).collect();
        let rows: Vec<Row> = data
            .into_iter()
            .map(|row| Row::from_values(row.into_iter().map(Into::into).collect()))
            .collect();

        for (i, row) in rows.iter().enumerate() {
            if row.len() != header.len() {
                return Err(TableError::RowLength {
                    row: i,
                    expected: header.len(),
                    found: row.len(),
                });
            }
        }
        if stubs.len() != rows.len() {
            return Err(TableError::StubCount {
                stubs: stubs.len(),
                rows: rows.len(),
            });
        }

        Ok(Self {
            title: None,
            header,
            stubs,
            rows,
            formats,
        })
    }

    /// Number of data columns (header width)
    pub fn ncols(&self) -> usize {
        self.header.len()
    }

    /// Number of data rows
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// The header row
    pub fn header(&self) -> &Row {
        &self.header
    }

    /// The data rows
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The stub (row-label) column
    pub fn stubs(&self) -> &[String] {
        &self.stubs
    }

    /// The table title, if set
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set the table title shown by the text renderer.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Builder: set the table title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.set_title(title);
        self
    }

    /// The per-target format configurations
    pub fn formats(&self) -> &FormatSet {
        &self.formats
    }

    /// Mutable access to the per-target format configurations
    pub fn formats_mut(&mut self) -> &mut FormatSet {
        &mut self.formats
    }

    /// Builder: replace the configuration for the target named by
    /// `fmt.target`.
    pub fn with_format(mut self, fmt: TableFormat) -> Self {
        match fmt.target {
            Target::Text => self.formats.text = fmt,
            Target::Latex => self.formats.latex = fmt,
            Target::Html => self.formats.html = fmt,
            Target::Csv => self.formats.csv = fmt,
        }
        self
    }

    /// The data cell at (`row`, `col`), if in bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.cells.get(col))
    }

    /// Mutable access to the data cell at (`row`, `col`), if in bounds
    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row).and_then(|r| r.cells.get_mut(col))
    }

    /// Walk every cell (header row first, then data rows) and store the
    /// labeller's result as the cell label wherever it returns a
    /// non-empty string. Other cells keep any prior label. Reapplying
    /// with a different labeller overwrites earlier labels.
    pub fn label_cells<L: Labeller>(&mut self, labeller: L) {
        let cells = self
            .header
            .cells
            .iter_mut()
            .chain(self.rows.iter_mut().flat_map(|row| row.cells.iter_mut()));
        for cell in cells {
            if let Some(label) = labeller.label_for(cell) {
                if !label.is_empty() {
                    cell.label = Some(label);
                }
            }
        }
    }

    /// Append another table's rows and stubs below this one. The other
    /// table's title and formats are dropped.
    pub fn extend(&mut self, other: Table) -> Result<()> {
        if other.ncols() != self.ncols() {
            return Err(TableError::ColumnMismatch {
                expected: self.ncols(),
                found: other.ncols(),
            });
        }
        self.stubs.extend(other.stubs);
        self.rows.extend(other.rows);
        Ok(())
    }

    /// Append another table's header and data columns to the right.
    /// The other table's stubs, title, and formats are dropped; appended
    /// cells keep their kind, so they keep selecting the same format
    /// bucket under this table's configuration.
    pub fn extend_right(&mut self, other: Table) -> Result<()> {
        if other.nrows() != self.nrows() {
            return Err(TableError::RowCountMismatch {
                expected: self.nrows(),
                found: other.nrows(),
            });
        }
        self.header.cells.extend(other.header.cells);
        for (row, other_row) in self.rows.iter_mut().zip(other.rows) {
            row.cells.extend(other_row.cells);
        }
        Ok(())
    }

    /// Render as plain text.
    pub fn as_text(&self) -> String {
        render::text::render(self, &self.formats.text, None)
    }

    /// Render as plain text, displaying `missing` for every
    /// sentinel-missing cell regardless of its label.
    pub fn as_text_with_missing(&self, missing: &str) -> String {
        render::text::render(self, &self.formats.text, Some(missing))
    }

    /// Render as a LaTeX tabular fragment.
    pub fn as_latex_tabular(&self) -> String {
        render::latex::render(self, &self.formats.latex)
    }

    /// Render as an HTML table fragment.
    pub fn as_html(&self) -> String {
        render::html::render(self, &self.formats.html)
    }

    /// Render as CSV.
    pub fn as_csv(&self) -> String {
        render::csv::render(self, &self.formats.csv)
    }

    /// Render for the given target, dispatching on its format tag.
    pub fn render(&self, target: Target) -> String {
        match target {
            Target::Text => self.as_text(),
            Target::Latex => self.as_latex_tabular(),
            Target::Html => self.as_html(),
            Target::Csv => self.as_csv(),
        }
    }
}
