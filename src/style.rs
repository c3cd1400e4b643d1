//! Per-target rendering configuration.
//!
//! Every output target (text, LaTeX, HTML, CSV) consumes one
//! [`TableFormat`], a plain struct with a named field for each
//! recognized option. The preset constructors mirror the conventional
//! defaults for each target; callers override a subset through the
//! `with_*` builders.

use serde::{Deserialize, Serialize};

use crate::value::DataFormat;

/// Horizontal alignment within a padded column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Align {
    /// Flush left
    Left,
    /// Centered; an odd pad leaves the extra space on the right
    #[default]
    Center,
    /// Flush right
    Right,
}

impl Align {
    /// Pad `text` to `width` display columns. Text already at or past
    /// the width is returned unchanged, never truncated.
    pub fn pad(&self, text: &str, width: usize) -> String {
        let len = text.chars().count();
        if len >= width {
            return text.to_string();
        }
        let pad = width - len;
        match self {
            Align::Left => format!("{}{}", text, " ".repeat(pad)),
            Align::Right => format!("{}{}", " ".repeat(pad), text),
            Align::Center => {
                let left = pad / 2;
                format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
            }
        }
    }

    /// Column letter used in a LaTeX tabular column spec.
    pub fn latex_spec(&self) -> char {
        match self {
            Align::Left => 'l',
            Align::Center => 'c',
            Align::Right => 'r',
        }
    }
}

/// Prefix/suffix pair applied to cell text before layout.
///
/// Covers the per-role cell templates: `\textbf{…}` for LaTeX headers,
/// `<th>…</th>` / `<td>…</td>` for HTML, quoting for CSV labels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wrap {
    /// Text inserted before the cell content
    pub prefix: String,
    /// Text appended after the cell content
    pub suffix: String,
}

impl Wrap {
    /// Create a wrap from a prefix and suffix.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// The identity wrap: cell text passes through untouched.
    pub fn none() -> Self {
        Self::default()
    }

    /// Apply the wrap to `text`.
    pub fn apply(&self, text: &str) -> String {
        if self.prefix.is_empty() && self.suffix.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", self.prefix, text, self.suffix)
        }
    }
}

/// Horizontal rule emitted around the table body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decoration {
    /// No rule
    #[default]
    None,
    /// Repeat the text (cycled character-wise) to span the rendered row width
    Fill(String),
    /// Emit the text verbatim on its own line, e.g. `\toprule`
    Line(String),
}

impl Decoration {
    /// Render the decoration for a table whose rows are `width` columns
    /// wide, or `None` when no line should be emitted.
    pub(crate) fn render(&self, width: usize) -> Option<String> {
        match self {
            Decoration::None => None,
            Decoration::Fill(text) if text.is_empty() => None,
            Decoration::Fill(text) => Some(text.chars().cycle().take(width).collect()),
            Decoration::Line(text) => Some(text.clone()),
        }
    }
}

/// Output target consuming a format configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Target {
    /// Plain text
    Text,
    /// LaTeX tabular fragment
    Latex,
    /// HTML table fragment
    Html,
    /// Comma-separated values
    Csv,
}

/// Rendering options for one output target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFormat {
    /// Which renderer consumes this configuration
    pub target: Target,
    /// Data formats indexed by cell kind; cycles when shorter, and an
    /// empty list behaves as `[DataFormat::General]`
    pub data_fmts: Vec<DataFormat>,
    /// Display text for the empty header-row stub slot
    pub empty_cell: String,
    /// Placeholder for sentinel-missing values with no explicit label
    pub missing: String,
    /// Lower bound on every column width
    pub min_width: usize,
    /// Separator between cells in a row
    pub colsep: String,
    /// Text prepended to every rendered row
    pub row_pre: String,
    /// Text appended to every rendered row
    pub row_post: String,
    /// Rule above the table
    pub table_dec_above: Decoration,
    /// Rule between the header row and the first data row
    pub header_dec_below: Decoration,
    /// Rule below the table
    pub table_dec_below: Decoration,
    /// Template around header cell text
    pub header_wrap: Wrap,
    /// Template around stub cell text
    pub stub_wrap: Wrap,
    /// Template around data cell text
    pub data_wrap: Wrap,
    /// Title alignment (text output)
    pub title_align: Align,
    /// Alignment for every slot of the header row
    pub header_align: Align,
    /// Alignment for data cells
    pub data_align: Align,
    /// Alignment for stub cells
    pub stub_align: Align,
    /// Pad cells to the column width; CSV turns this off
    pub pad_cells: bool,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self::text()
    }
}

impl TableFormat {
    /// Plain-text defaults: space-separated columns framed by `=` and
    /// `-` rules.
    pub fn text() -> Self {
        Self {
            target: Target::Text,
            data_fmts: vec![DataFormat::General],
            empty_cell: String::new(),
            missing: "--".to_string(),
            min_width: 0,
            colsep: " ".to_string(),
            row_pre: String::new(),
            row_post: String::new(),
            table_dec_above: Decoration::Fill("=".to_string()),
            header_dec_below: Decoration::Fill("-".to_string()),
            table_dec_below: Decoration::Fill("-".to_string()),
            header_wrap: Wrap::none(),
            stub_wrap: Wrap::none(),
            data_wrap: Wrap::none(),
            title_align: Align::Center,
            header_align: Align::Center,
            data_align: Align::Center,
            stub_align: Align::Left,
            pad_cells: true,
        }
    }

    /// LaTeX tabular defaults: `&`-separated cells, booktabs rules,
    /// bold header and stub text.
    pub fn latex() -> Self {
        Self {
            target: Target::Latex,
            data_fmts: vec![DataFormat::General],
            empty_cell: String::new(),
            missing: "--".to_string(),
            min_width: 0,
            colsep: " & ".to_string(),
            row_pre: String::new(),
            row_post: "  \\\\".to_string(),
            table_dec_above: Decoration::Line("\\toprule".to_string()),
            header_dec_below: Decoration::Line("\\midrule".to_string()),
            table_dec_below: Decoration::Line("\\bottomrule".to_string()),
            header_wrap: Wrap::new("\\textbf{", "}"),
            stub_wrap: Wrap::new("\\textbf{", "}"),
            data_wrap: Wrap::none(),
            title_align: Align::Center,
            header_align: Align::Center,
            data_align: Align::Center,
            stub_align: Align::Left,
            pad_cells: true,
        }
    }

    /// HTML defaults: `<th>`/`<td>` cell elements, one `<tr>` per row.
    /// Column padding survives purely as source cosmetics.
    pub fn html() -> Self {
        Self {
            target: Target::Html,
            data_fmts: vec![DataFormat::General],
            empty_cell: "<td></td>".to_string(),
            missing: "--".to_string(),
            min_width: 0,
            colsep: " ".to_string(),
            row_pre: "<tr>\n  ".to_string(),
            row_post: "\n</tr>".to_string(),
            table_dec_above: Decoration::None,
            header_dec_below: Decoration::None,
            table_dec_below: Decoration::None,
            header_wrap: Wrap::new("<th>", "</th>"),
            stub_wrap: Wrap::new("<th>", "</th>"),
            data_wrap: Wrap::new("<td>", "</td>"),
            title_align: Align::Center,
            header_align: Align::Center,
            data_align: Align::Center,
            stub_align: Align::Left,
            pad_cells: true,
        }
    }

    /// CSV defaults: comma-separated, quoted header and stub text,
    /// no padding or rules.
    pub fn csv() -> Self {
        Self {
            target: Target::Csv,
            data_fmts: vec![DataFormat::General],
            empty_cell: String::new(),
            missing: "--".to_string(),
            min_width: 0,
            colsep: ",".to_string(),
            row_pre: String::new(),
            row_post: String::new(),
            table_dec_above: Decoration::None,
            header_dec_below: Decoration::None,
            table_dec_below: Decoration::None,
            header_wrap: Wrap::new("\"", "\""),
            stub_wrap: Wrap::new("\"", "\""),
            data_wrap: Wrap::none(),
            title_align: Align::Left,
            header_align: Align::Left,
            data_align: Align::Left,
            stub_align: Align::Left,
            pad_cells: false,
        }
    }

    /// Builder: set the data format list.
    pub fn with_data_fmts(mut self, fmts: Vec<DataFormat>) -> Self {
        self.data_fmts = fmts;
        self
    }

    /// Builder: set the empty header-slot text.
    pub fn with_empty_cell(mut self, text: impl Into<String>) -> Self {
        self.empty_cell = text.into();
        self
    }

    /// Builder: set the missing-value placeholder.
    pub fn with_missing(mut self, text: impl Into<String>) -> Self {
        self.missing = text.into();
        self
    }

    /// Builder: set the minimum column width.
    pub fn with_min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    /// Builder: set the cell separator.
    pub fn with_colsep(mut self, sep: impl Into<String>) -> Self {
        self.colsep = sep.into();
        self
    }

    /// Builder: set the row prefix.
    pub fn with_row_pre(mut self, pre: impl Into<String>) -> Self {
        self.row_pre = pre.into();
        self
    }

    /// Builder: set the row suffix.
    pub fn with_row_post(mut self, post: impl Into<String>) -> Self {
        self.row_post = post.into();
        self
    }

    /// Builder: set the rule above the table.
    pub fn with_table_dec_above(mut self, dec: Decoration) -> Self {
        self.table_dec_above = dec;
        self
    }

    /// Builder: set the rule below the header.
    pub fn with_header_dec_below(mut self, dec: Decoration) -> Self {
        self.header_dec_below = dec;
        self
    }

    /// Builder: set the rule below the table.
    pub fn with_table_dec_below(mut self, dec: Decoration) -> Self {
        self.table_dec_below = dec;
        self
    }

    /// Builder: set the title alignment.
    pub fn with_title_align(mut self, align: Align) -> Self {
        self.title_align = align;
        self
    }

    /// Builder: set the header-row alignment.
    pub fn with_header_align(mut self, align: Align) -> Self {
        self.header_align = align;
        self
    }

    /// Builder: set the data-cell alignment.
    pub fn with_data_align(mut self, align: Align) -> Self {
        self.data_align = align;
        self
    }

    /// Builder: set the stub-cell alignment.
    pub fn with_stub_align(mut self, align: Align) -> Self {
        self.stub_align = align;
        self
    }
}

/// One format per output target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatSet {
    /// Plain-text configuration
    pub text: TableFormat,
    /// LaTeX configuration
    pub latex: TableFormat,
    /// HTML configuration
    pub html: TableFormat,
    /// CSV configuration
    pub csv: TableFormat,
}

impl Default for FormatSet {
    fn default() -> Self {
        Self {
            text: TableFormat::text(),
            latex: TableFormat::latex(),
            html: TableFormat::html(),
            csv: TableFormat::csv(),
        }
    }
}
