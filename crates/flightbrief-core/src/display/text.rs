//! Fixed-width plain text rendering.

use std::fmt;

use crate::document::{Align, Cell, Document, Page, Row, Section, Table, TextStyle};

/// Gap printed between adjacent table columns.
const COLUMN_GAP: &str = "  ";

/// Width of a rule with no text of its own.
const RULE_WIDTH: usize = 72;

/// Borrowing wrapper that renders a document node as plain text.
pub struct PlainText<'a, T>(pub &'a T);

impl fmt::Display for PlainText<'_, Document> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.0.pages.len();
        for (i, page) in self.0.pages.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "Page {} of {total}: {}", i + 1, page.title)?;
            writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
            write!(f, "{}", PlainText(page))?;
        }
        Ok(())
    }
}

impl fmt::Display for PlainText<'_, Page> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.0.sections {
            write!(f, "{}", PlainText(section))?;
        }
        Ok(())
    }
}

impl fmt::Display for PlainText<'_, Section> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Section::Text(block) => write_text(f, block.style, &block.text),
            Section::KeyValue(kv) => writeln!(f, "{} {}", kv.label, kv.value),
            Section::Table(table) => write!(f, "{}", PlainText(table)),
        }
    }
}

impl fmt::Display for PlainText<'_, Table> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in layout_table(self.0) {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn write_text(f: &mut fmt::Formatter<'_>, style: TextStyle, text: &str) -> fmt::Result {
    let width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    match style {
        TextStyle::Header => {
            writeln!(f, "{text}")?;
            writeln!(f, "{}", "=".repeat(width))
        }
        TextStyle::SubHeader => {
            writeln!(f, "{text}")?;
            writeln!(f, "{}", "-".repeat(width))
        }
        TextStyle::Banner { inverted: false } => writeln!(f, "=== {text} ==="),
        TextStyle::Banner { inverted: true } => writeln!(f, "### {text} ###"),
        TextStyle::Body | TextStyle::Notice => writeln!(f, "{text}"),
        TextStyle::Rule if text.is_empty() => writeln!(f, "{}", "-".repeat(RULE_WIDTH)),
        TextStyle::Rule => writeln!(f, "{text}"),
        TextStyle::Blank => writeln!(f),
    }
}

/// Lays out a table as aligned lines with trailing whitespace removed.
///
/// Column widths come from single-column cells and their width hints. A
/// spanning cell takes the combined width of the columns it covers.
pub(crate) fn layout_table(table: &Table) -> Vec<String> {
    let widths = column_widths(table);
    table.rows.iter().map(|row| render_row(row, &widths)).collect()
}

fn cell_width(cell: &Cell) -> usize {
    cell.text.chars().count().max(cell.width.unwrap_or(0))
}

fn column_widths(table: &Table) -> Vec<usize> {
    let mut widths = vec![0; table.column_count()];
    for row in &table.rows {
        let mut column = 0;
        for cell in &row.cells {
            if cell.span <= 1 {
                widths[column] = widths[column].max(cell_width(cell));
            }
            column += cell.span.max(1);
        }
    }
    widths
}

fn render_row(row: &Row, widths: &[usize]) -> String {
    let mut out = String::new();
    let mut column = 0;

    for (i, cell) in row.cells.iter().enumerate() {
        let end = (column + cell.span.max(1)).min(widths.len());
        let covered = &widths[column.min(end)..end];
        let width = covered.iter().sum::<usize>() + COLUMN_GAP.len() * covered.len().saturating_sub(1);

        if i > 0 {
            out.push_str(COLUMN_GAP);
        }
        out.push_str(&align(&cell.text, cell.align, width.max(cell_width(cell))));
        column += cell.span.max(1);
    }

    out.trim_end().to_string()
}

fn align(text: &str, align: Align, width: usize) -> String {
    match align {
        Align::Left => format!("{text:<width$}"),
        Align::Center => format!("{text:^width$}"),
        Align::Right => format!("{text:>width$}"),
    }
}
