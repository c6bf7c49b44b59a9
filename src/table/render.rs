//! Markdown rendering

use super::TruthTable;
use crate::log::targets::RENDER;
use std::iter;

/// Render a table as Markdown
///
/// The header wraps each variable and the result label in inline math, the
/// separator has one `-` per column, and each row lists `1`/`0` cells. The
/// output has no trailing newline.
///
/// ```
/// use latex_truth_table::generate_truth_table;
///
/// let table = generate_truth_table(r"p \to q").unwrap();
/// assert_eq!(
///     table,
///     "|$p$|$q$|$\\text{Result}$|\n\
///      |-|-|-|\n\
///      | 0 | 0 | 1 |\n\
///      | 0 | 1 | 1 |\n\
///      | 1 | 0 | 0 |\n\
///      | 1 | 1 | 1 |"
/// );
/// ```
pub fn render_markdown(table: &TruthTable, result_label: &str) -> String {
    let header: Vec<String> = table
        .variables()
        .iter()
        .map(|name| format!("${}$", name))
        .chain(iter::once(format!("$\\text{{{}}}$", result_label)))
        .collect();

    let mut lines = Vec::with_capacity(table.len() + 2);
    lines.push(format!("|{}|", header.join("|")));
    lines.push(format!("|{}|", vec!["-"; header.len()].join("|")));

    for row in table.rows() {
        let cells: Vec<&str> = row
            .assignment
            .iter()
            .chain(iter::once(&row.result))
            .map(|&value| if value { "1" } else { "0" })
            .collect();
        lines.push(format!("| {} |", cells.join(" | ")));
    }

    log::debug!(target: RENDER, "Rendered {} row(s)", table.len());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::VariableSet;
    use crate::table::Row;

    #[test]
    fn test_constant_table_has_only_result_column() {
        let table = TruthTable::new(
            VariableSet::default(),
            vec![Row {
                assignment: vec![],
                result: false,
            }],
        );
        assert_eq!(
            render_markdown(&table, "Result"),
            "|$\\text{Result}$|\n|-|\n| 0 |"
        );
    }

    #[test]
    fn test_custom_label() {
        let table = TruthTable::new(
            VariableSet::extract("p"),
            vec![
                Row {
                    assignment: vec![false],
                    result: true,
                },
                Row {
                    assignment: vec![true],
                    result: false,
                },
            ],
        );
        assert_eq!(
            render_markdown(&table, "\\neg p"),
            "|$p$|$\\text{\\neg p}$|\n|-|-|\n| 0 | 1 |\n| 1 | 0 |"
        );
    }

    #[test]
    fn test_no_trailing_newline() {
        let table = TruthTable::new(
            VariableSet::extract("p"),
            vec![Row {
                assignment: vec![true],
                result: true,
            }],
        );
        let rendered = render_markdown(&table, "Result");
        assert!(!rendered.ends_with('\n'));
        assert!(rendered.ends_with("| 1 | 1 |"));
    }
}
