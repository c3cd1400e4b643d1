//! Table cells and the cell-labeling interface.

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// Smallest addressable unit of table data: a value, a format-bucket
/// index, and an optional display override.
///
/// The `kind` index selects which entry of the active format's
/// `data_fmts` list applies, wrapping around when the list is shorter.
/// A `label`, when set, replaces the formatted value in every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Cell payload
    pub value: CellValue,
    /// Index into the active format's data format list
    pub kind: usize,
    /// Display override; takes precedence over numeric formatting
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Cell {
    /// Create a cell from a value and a format-bucket index.
    pub fn new(value: impl Into<CellValue>, kind: usize) -> Self {
        Self {
            value: value.into(),
            kind,
            label: None,
        }
    }

    /// True when the value is the sentinel-missing marker (float NaN)
    pub fn is_missing(&self) -> bool {
        self.value.is_missing()
    }
}

/// Produces an optional display override for a cell.
///
/// Used by [`Table::label_cells`](crate::Table::label_cells) to retrofit
/// display text (e.g. "missing" for NaN values) without touching the
/// underlying data. Any `Fn(&Cell) -> Option<String>` closure implements
/// this for free.
pub trait Labeller {
    /// Return the override text for `cell`, or `None` to leave it alone.
    fn label_for(&self, cell: &Cell) -> Option<String>;
}

impl<F> Labeller for F
where
    F: Fn(&Cell) -> Option<String>,
{
    fn label_for(&self, cell: &Cell) -> Option<String> {
        self(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_construction() {
        let data = [
            CellValue::from(0.0),
            CellValue::from(1),
            CellValue::from(2),
            CellValue::from(3.333),
        ];
        let cells: Vec<Cell> = data
            .iter()
            .enumerate()
            .map(|(i, v)| Cell::new(v.clone(), i % 2))
            .collect();
        for (cell, value) in cells.iter().zip(&data) {
            assert_eq!(&cell.value, value);
        }
        assert_eq!(cells[0].kind, 0);
        assert_eq!(cells[3].kind, 1);
    }

    #[test]
    fn test_cell_missing() {
        assert!(Cell::new(f64::NAN, 0).is_missing());
        assert!(!Cell::new(1.0, 0).is_missing());
    }

    #[test]
    fn test_closure_labeller() {
        let labeller = |cell: &Cell| {
            if cell.is_missing() {
                Some("missing".to_string())
            } else {
                None
            }
        };
        assert_eq!(
            labeller.label_for(&Cell::new(f64::NAN, 0)),
            Some("missing".to_string())
        );
        assert_eq!(labeller.label_for(&Cell::new(5, 0)), None);
    }
}
