//! # stattable
//!
//! A summary-table formatter: build one [`Table`] from a 2-D grid of
//! mixed numeric/text values plus header and stub (row-label) strings,
//! then render it as plain text, a LaTeX tabular fragment, an HTML
//! table fragment, or CSV.
//!
//! ## Overview
//!
//! The crate targets small report tables (regression summaries, count
//! breakdowns), not bulk data. Each output target has its own
//! [`TableFormat`] — column separators, numeric formats, alignment,
//! decoration rules — so the same table renders idiomatically
//! everywhere without touching the data:
//!
//! - **Text**: aligned columns, `=`/`-` rules sized to the row width
//! - **LaTeX**: `tabular` environment with booktabs rules and bold labels
//! - **HTML**: `<th>`/`<td>` cells under a `<table class="simpletable">`
//! - **CSV**: unpadded cells with quoted labels
//!
//! Cells carry a `kind` index selecting a [`DataFormat`] bucket (the
//! list cycles when shorter), and an optional display label that
//! overrides numeric formatting — the hook used to show placeholder
//! text for missing (NaN) values.
//!
//! ## Example
//!
//! ```rust
//! use stattable::{CellValue, Table};
//!
//! let data = vec![
//!     vec![CellValue::from(0.25), CellValue::from(8)],
//!     vec![CellValue::from(1.5), CellValue::from(3)],
//! ];
//! let table = Table::new(data, vec!["mean", "count"], vec!["a", "b"])
//!     .unwrap()
//!     .with_title("summary");
//!
//! let text = table.as_text();
//! assert!(text.contains("mean"));
//! assert!(text.contains("0.25"));
//!
//! // Retrofit display text onto cells matching a predicate
//! let mut table = table;
//! table.label_cells(|cell: &stattable::Cell| {
//!     cell.is_missing().then(|| "missing".to_string())
//! });
//! ```

pub mod cell;
pub mod error;
mod render;
pub mod style;
pub mod table;
pub mod value;

pub use cell::{Cell, Labeller};
pub use error::TableError;
pub use style::{Align, Decoration, FormatSet, TableFormat, Target, Wrap};
pub use table::{Row, Table};
pub use value::{CellValue, DataFormat};

/// Result type for stattable operations
pub type Result<T> = std::result::Result<T, TableError>;
