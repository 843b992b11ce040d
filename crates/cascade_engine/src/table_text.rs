//! Flattening tables to text
//!
//! Four modes: an ASCII box that draws only the borders the table shows, tab
//! separated rows, cells separated by two spaces, and `auto`, which picks the
//! box when any border is visible and tabs otherwise.

use crate::{detect_borders_with, BorderInfo, CascadeConfig, StyleResolver, TableMode};
use doc_model::{BorderSet, Table, TableRow};
use unicode_segmentation::UnicodeSegmentation;

/// Converts tables to text in one mode
#[derive(Debug, Clone, Copy, Default)]
pub struct TableTextConverter {
    mode: TableMode,
}

impl TableTextConverter {
    pub fn new(mode: TableMode) -> Self {
        Self { mode }
    }

    pub fn from_config(config: &CascadeConfig) -> Self {
        Self::new(config.table_mode)
    }

    pub fn mode(&self) -> TableMode {
        self.mode
    }

    /// Convert using the table's direct borders
    pub fn convert(&self, table: &Table) -> String {
        let direct = table.properties.borders.clone().unwrap_or_default();
        self.convert_with(table, &direct)
    }

    /// Convert using borders resolved through the table style
    pub fn convert_resolved(&self, resolver: &mut StyleResolver<'_>, table: &Table) -> String {
        let borders = resolver.effective_table(table).borders.unwrap_or_default();
        self.convert_with(table, &borders)
    }

    /// Convert against a caller-supplied table-level border set
    pub fn convert_with(&self, table: &Table, table_level: &BorderSet) -> String {
        if table.is_empty() {
            return String::new();
        }

        match self.mode {
            TableMode::Ascii => render_ascii_table(table, &BorderInfo::full()),
            TableMode::Tabs => table_to_tabs(table),
            TableMode::Plain => table_to_plain(table),
            TableMode::Auto => {
                let borders = detect_borders_with(table, table_level);
                let boxed = borders.has_any();
                tracing::trace!(
                    target: "cascade::tables",
                    rows = table.row_count(),
                    boxed,
                    "auto table mode"
                );
                if boxed {
                    render_ascii_table(table, &borders)
                } else {
                    table_to_tabs(table)
                }
            }
        }
    }
}

/// Tab-separated rows
pub fn table_to_tabs(table: &Table) -> String {
    join_rows(table, "\t")
}

/// Rows with two spaces between cells
pub fn table_to_plain(table: &Table) -> String {
    join_rows(table, "  ")
}

fn join_rows(table: &Table, separator: &str) -> String {
    table
        .rows
        .iter()
        .map(|row| row_text(row).join(separator))
        .collect::<Vec<_>>()
        .join("\n")
}

fn row_text(row: &TableRow) -> Vec<String> {
    row.cells.iter().map(|cell| cell.plain_text()).collect()
}

fn text_width(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Render a table as an ASCII box, drawing only the given borders
///
/// Horizontal rules appear only for visible edge classes; column separators
/// only when `inside_v` is visible. Cell text is kept on one line.
pub fn render_ascii_table(table: &Table, borders: &BorderInfo) -> String {
    if table.is_empty() {
        return String::new();
    }

    let columns = table.column_count();
    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| {
            let mut cells: Vec<String> = row_text(row)
                .into_iter()
                .map(|text| text.replace('\n', " "))
                .collect();
            cells.resize(columns, String::new());
            cells
        })
        .collect();

    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            rows.iter()
                .map(|row| text_width(&row[col]))
                .max()
                .unwrap_or(0)
                .max(1)
        })
        .collect();

    let rule = horizontal_rule(&widths, borders);
    let mut lines = Vec::new();

    if borders.top {
        lines.push(rule.clone());
    }
    for (index, row) in rows.iter().enumerate() {
        lines.push(data_row(row, &widths, borders));
        if borders.inside_h && index + 1 < rows.len() {
            lines.push(rule.clone());
        }
    }
    if borders.bottom {
        lines.push(rule);
    }

    lines.join("\n")
}

fn horizontal_rule(widths: &[usize], borders: &BorderInfo) -> String {
    let inner = if borders.inside_v {
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    } else {
        let total = widths.iter().map(|w| w + 2).sum::<usize>() + widths.len().saturating_sub(1);
        "-".repeat(total)
    };
    let left = if borders.left { '+' } else { '-' };
    let right = if borders.right { '+' } else { '-' };
    format!("{}{}{}", left, inner, right)
}

fn data_row(cells: &[String], widths: &[usize], borders: &BorderInfo) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(text, width)| {
            let pad = width.saturating_sub(text_width(text));
            format!(" {}{} ", text, " ".repeat(pad))
        })
        .collect();
    let separator = if borders.inside_v { "|" } else { " " };
    let left = if borders.left { '|' } else { ' ' };
    let right = if borders.right { '|' } else { ' ' };
    format!("{}{}{}", left, padded.join(separator), right)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{Border, BorderEdge, Paragraph, TableCell};

    fn sample() -> Table {
        Table::new(vec![
            TableRow::from_texts(["Name", "Qty"]),
            TableRow::from_texts(["Apple", "3"]),
        ])
    }

    #[test]
    fn test_full_ascii_box() {
        let text = render_ascii_table(&sample(), &BorderInfo::full());
        let expected = "\
+-------+-----+
| Name  | Qty |
+-------+-----+
| Apple | 3   |
+-------+-----+";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_inside_h_only_has_no_outer_box() {
        let borders = BorderInfo {
            inside_h: true,
            ..Default::default()
        };
        let text = render_ascii_table(&sample(), &borders);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  Name    Qty  ");
        assert_eq!(lines[1], "---------------");
        assert_eq!(lines[2], "  Apple   3    ");
    }

    #[test]
    fn test_outer_box_without_column_separators() {
        let borders = BorderInfo {
            top: true,
            bottom: true,
            left: true,
            right: true,
            ..Default::default()
        };
        let text = render_ascii_table(&sample(), &borders);
        assert_eq!(text.lines().next(), Some("+-------------+"));
        assert_eq!(text.lines().nth(1), Some("| Name    Qty |"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_ragged_rows_and_empty_cells() {
        let table = Table::new(vec![
            TableRow::from_texts(["a", "b", "c"]),
            TableRow::from_texts(["d"]),
            TableRow::new(vec![TableCell::new()]),
        ]);
        let text = render_ascii_table(&table, &BorderInfo::full());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "+---+---+---+");
        assert_eq!(lines[3], "| d |   |   |");
        assert_eq!(lines[5], "|   |   |   |");
    }

    #[test]
    fn test_multi_paragraph_cell_is_one_line() {
        let mut cell = TableCell::with_text("first");
        cell.paragraphs.push(Paragraph::with_text("second"));
        let table = Table::new(vec![TableRow::new(vec![cell])]);

        assert_eq!(
            render_ascii_table(&table, &BorderInfo::full()).lines().nth(1),
            Some("| first second |")
        );
        assert_eq!(table_to_tabs(&table), "first\nsecond");
    }

    #[test]
    fn test_width_counts_graphemes() {
        let table = Table::new(vec![
            TableRow::from_texts(["e\u{301}te\u{301}"]),
            TableRow::from_texts(["abcd"]),
        ]);
        let text = render_ascii_table(&table, &BorderInfo::full());
        assert_eq!(text.lines().nth(1), Some("| e\u{301}te\u{301}  |"));
    }

    #[test]
    fn test_tabs_and_plain() {
        assert_eq!(table_to_tabs(&sample()), "Name\tQty\nApple\t3");
        assert_eq!(table_to_plain(&sample()), "Name  Qty\nApple  3");
    }

    #[test]
    fn test_auto_mode_without_borders_uses_tabs() {
        let converter = TableTextConverter::default();
        assert_eq!(converter.mode(), TableMode::Auto);
        assert_eq!(converter.convert(&sample()), "Name\tQty\nApple\t3");
    }

    #[test]
    fn test_auto_mode_with_borders_uses_detected_box() {
        let table = sample().with_borders(
            doc_model::BorderSet::default().with(BorderEdge::InsideH, Border::single()),
        );
        let text = TableTextConverter::new(TableMode::Auto).convert(&table);
        assert_eq!(text.lines().nth(1), Some("---------------"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_explicit_ascii_draws_everything() {
        let text = TableTextConverter::new(TableMode::Ascii).convert(&sample());
        assert_eq!(text, render_ascii_table(&sample(), &BorderInfo::full()));
    }

    #[test]
    fn test_empty_table() {
        let empty = Table::new(Vec::new());
        assert_eq!(TableTextConverter::new(TableMode::Ascii).convert(&empty), "");
        assert_eq!(render_ascii_table(&empty, &BorderInfo::full()), "");
        assert_eq!(TableTextConverter::new(TableMode::Tabs).convert(&empty), "");
    }
}
