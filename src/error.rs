//! Error types for stattable

use thiserror::Error;

/// Errors raised while building or reshaping a table.
///
/// Rendering itself never fails: format lookups wrap around and
/// unformattable values fall back to their raw string form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A data row does not match the header width
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Stub labels and data rows out of step
    #[error("{stubs} stub labels for {rows} data rows")]
    StubCount { stubs: usize, rows: usize },

    /// Stacked table has a different column count
    #[error("cannot stack a {found}-column table under a {expected}-column table")]
    ColumnMismatch { expected: usize, found: usize },

    /// Joined table has a different row count
    #[error("cannot join a {found}-row table beside a {expected}-row table")]
    RowCountMismatch { expected: usize, found: usize },
}
