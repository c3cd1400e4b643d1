//! LaTeX tabular renderer.

use crate::style::TableFormat;
use crate::table::Table;

/// Render `table` as a `tabular` environment. The column spec is the
/// stub alignment followed by the data alignment once per data column.
pub(crate) fn render(table: &Table, fmt: &TableFormat) -> String {
    let colspec: String = std::iter::once(fmt.stub_align.latex_spec())
        .chain(std::iter::repeat(fmt.data_align.latex_spec()).take(table.ncols()))
        .collect();
    let (body, _) = super::framed_body(table, fmt, None);

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format!("\\begin{{tabular}}{{{}}}", colspec));
    lines.extend(body);
    lines.push("\\end{tabular}".to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use crate::style::Align;
    use crate::value::CellValue;
    use crate::Table;

    fn sample() -> Table {
        Table::new(
            vec![
                vec![CellValue::from(1), CellValue::from(2.5)],
                vec![CellValue::from(3), CellValue::from(4.5)],
            ],
            vec!["a", "b"],
            vec!["r1", "r2"],
        )
        .unwrap()
    }

    #[test]
    fn test_environment_and_rules() {
        let latex = sample().as_latex_tabular();
        let lines: Vec<&str> = latex.lines().collect();
        assert_eq!(lines[0], "\\begin{tabular}{lcc}");
        assert_eq!(lines[1], "\\toprule");
        assert_eq!(lines[3], "\\midrule");
        assert_eq!(lines[lines.len() - 2], "\\bottomrule");
        assert_eq!(lines[lines.len() - 1], "\\end{tabular}");
    }

    #[test]
    fn test_colspec_follows_alignment() {
        let mut table = sample();
        table.formats_mut().latex.data_align = Align::Right;
        table.formats_mut().latex.stub_align = Align::Center;
        assert!(table
            .as_latex_tabular()
            .starts_with("\\begin{tabular}{crr}"));
    }

    #[test]
    fn test_header_and_stub_cells_are_bold() {
        let latex = sample().as_latex_tabular();
        assert!(latex.contains("\\textbf{a}"));
        assert!(latex.contains("\\textbf{r1}"));
        // data cells are not wrapped
        assert!(!latex.contains("\\textbf{1}"));
    }

    #[test]
    fn test_rows_end_with_terminator() {
        let latex = sample().as_latex_tabular();
        for line in latex.lines() {
            if line.contains('&') {
                assert!(line.ends_with("\\\\"), "row not terminated: {line:?}");
            }
        }
    }
}
